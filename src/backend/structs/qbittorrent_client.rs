use parking_lot::RwLock;

#[derive(Debug)]
pub struct QbittorrentClient {
    pub(crate) name: String,
    pub(crate) base_url: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) http: reqwest::Client,
    pub(crate) sid: RwLock<Option<String>>,
}
