use crate::snapshot::structs::global_status::GlobalStatus;
use crate::snapshot::structs::torrent_record::TorrentRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackendSnapshot {
    pub status: GlobalStatus,
    pub torrents: Vec<TorrentRecord>,
}
