use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone)]
pub struct TransmissionRequest<'a> {
    pub method: &'a str,
    pub arguments: serde_json::Value,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TransmissionResponse<T> {
    pub result: String,
    pub arguments: Option<T>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TransmissionSessionGet {
    #[serde(rename = "download-dir")]
    pub download_dir: Option<String>,
    pub version: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TransmissionSessionStats {
    pub download_speed: u64,
    pub upload_speed: u64,
    #[serde(rename = "cumulative-stats")]
    pub cumulative_stats: TransmissionCumulativeStats,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TransmissionCumulativeStats {
    pub downloaded_bytes: u64,
    pub uploaded_bytes: u64,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TransmissionFreeSpace {
    pub path: String,
    #[serde(rename = "size-bytes")]
    pub size_bytes: i64,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TransmissionTorrentList {
    pub torrents: Vec<TransmissionTorrent>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TransmissionTorrent {
    pub hash_string: String,
    pub name: String,
    pub total_size: u64,
    pub downloaded_ever: u64,
    pub uploaded_ever: u64,
    pub trackers: Vec<TransmissionTracker>,
    pub status: i64,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TransmissionTracker {
    pub announce: String,
}
