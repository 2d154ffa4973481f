/// One torrent. `downloaded` and `uploaded` are lifetime counters kept by the
/// client; `state` is the client's own status word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TorrentRecord {
    pub hash: Option<String>,
    pub name: String,
    pub size: u64,
    pub downloaded: u64,
    pub uploaded: u64,
    pub tracker: String,
    pub category: Option<String>,
    pub state: String,
}
