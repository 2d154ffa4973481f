use crate::snapshot::structs::backend_snapshot::BackendSnapshot;
use crate::snapshot::structs::global_status::GlobalStatus;
use crate::snapshot::structs::torrent_record::TorrentRecord;

impl BackendSnapshot {
    pub fn new(status: GlobalStatus, torrents: Vec<TorrentRecord>) -> BackendSnapshot
    {
        BackendSnapshot { status, torrents }
    }
}
