use parking_lot::RwLock;

#[derive(Debug)]
pub struct TransmissionClient {
    pub(crate) name: String,
    pub(crate) rpc_url: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) http: reqwest::Client,
    pub(crate) session_id: RwLock<Option<String>>,
}
