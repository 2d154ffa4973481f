use crate::backend::structs::qbittorrent_maindata::QbittorrentMainData;
use crate::snapshot::structs::backend_snapshot::BackendSnapshot;
use crate::snapshot::structs::global_status::GlobalStatus;
use crate::snapshot::structs::torrent_record::TorrentRecord;

impl QbittorrentMainData {
    pub fn global_status(&self) -> GlobalStatus
    {
        let state = &self.server_state;
        GlobalStatus {
            downloaded: state.alltime_dl,
            uploaded: state.alltime_ul,
            download_speed: state.dl_info_speed,
            upload_speed: state.up_info_speed,
            free_space_on_disk: state.free_space_on_disk,
        }
    }

    pub fn torrent_records(&self) -> Vec<TorrentRecord>
    {
        self.torrents.iter().map(|(hash, torrent)| TorrentRecord {
            hash: Some(hash.clone()),
            name: torrent.name.clone(),
            size: torrent.size,
            downloaded: torrent.downloaded,
            uploaded: torrent.uploaded,
            tracker: torrent.tracker.clone(),
            category: torrent.category.clone(),
            state: torrent.state.clone(),
        }).collect()
    }

    pub fn into_snapshot(self) -> BackendSnapshot
    {
        BackendSnapshot::new(self.global_status(), self.torrent_records())
    }
}
