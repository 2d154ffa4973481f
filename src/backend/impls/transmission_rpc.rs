use crate::backend::structs::transmission_rpc::{TransmissionSessionStats, TransmissionTorrent};
use crate::snapshot::structs::global_status::GlobalStatus;
use crate::snapshot::structs::torrent_record::TorrentRecord;

/// Native status string for a Transmission numeric torrent status. Values
/// outside 0..=6 are passed through as their decimal text.
pub fn transmission_state(status: i64) -> String
{
    match status {
        0 => String::from("stopped"),
        1 => String::from("check pending"),
        2 => String::from("checking"),
        3 => String::from("download pending"),
        4 => String::from("downloading"),
        5 => String::from("seed pending"),
        6 => String::from("seeding"),
        other => other.to_string(),
    }
}

impl TransmissionSessionStats {
    pub fn global_status(&self, free_space_on_disk: Option<u64>) -> GlobalStatus
    {
        GlobalStatus {
            downloaded: self.cumulative_stats.downloaded_bytes,
            uploaded: self.cumulative_stats.uploaded_bytes,
            download_speed: self.download_speed,
            upload_speed: self.upload_speed,
            free_space_on_disk,
        }
    }
}

impl TransmissionTorrent {
    pub fn into_record(self) -> TorrentRecord
    {
        let tracker = self.trackers.into_iter().next().map(|tracker| tracker.announce).unwrap_or_default();
        TorrentRecord {
            hash: Some(self.hash_string).filter(|hash| !hash.is_empty()),
            name: self.name,
            size: self.total_size,
            downloaded: self.downloaded_ever,
            uploaded: self.uploaded_ever,
            tracker,
            category: None,
            state: transmission_state(self.status),
        }
    }
}
