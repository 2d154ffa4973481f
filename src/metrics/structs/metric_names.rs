#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricNames {
    pub up: String,
    pub download_bytes_total: String,
    pub upload_bytes_total: String,
    pub download_speed_bytes: String,
    pub upload_speed_bytes: String,
    pub free_space_on_disk_bytes: String,
    pub tracker_torrent: String,
    pub tracker_torrent_size_bytes: String,
    pub tracker_torrent_status: String,
    pub tracker_torrent_download_bytes_total: String,
    pub tracker_torrent_upload_bytes_total: String,
    pub torrents_count: String,
    pub max_download_speed_bytes: String,
    pub max_upload_speed_bytes: String,
}
