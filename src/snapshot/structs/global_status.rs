/// Client-wide counters. `free_space_on_disk` is `None` when the client could
/// not report it for this poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalStatus {
    pub downloaded: u64,
    pub uploaded: u64,
    pub download_speed: u64,
    pub upload_speed: u64,
    pub free_space_on_disk: Option<u64>,
}
