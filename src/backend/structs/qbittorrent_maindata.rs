use std::collections::BTreeMap;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct QbittorrentMainData {
    #[serde(default)]
    pub server_state: QbittorrentServerState,
    #[serde(default)]
    pub torrents: BTreeMap<String, QbittorrentTorrent>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct QbittorrentServerState {
    pub alltime_dl: u64,
    pub alltime_ul: u64,
    pub dl_info_speed: u64,
    pub up_info_speed: u64,
    pub free_space_on_disk: Option<u64>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct QbittorrentTorrent {
    pub name: String,
    pub size: u64,
    pub downloaded: u64,
    pub uploaded: u64,
    pub tracker: String,
    pub state: String,
    pub category: Option<String>,
}
