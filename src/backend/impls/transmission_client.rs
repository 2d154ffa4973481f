use async_trait::async_trait;
use log::{debug, info};
use parking_lot::RwLock;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use crate::backend::errors::BackendError;
use crate::backend::structs::transmission_client::TransmissionClient;
use crate::backend::structs::transmission_rpc::{TransmissionFreeSpace, TransmissionRequest, TransmissionResponse, TransmissionSessionGet, TransmissionSessionStats, TransmissionTorrentList};
use crate::backend::traits::pollable_backend::PollableBackend;
use crate::config::structs::client_config::ClientConfig;
use crate::snapshot::structs::global_status::GlobalStatus;
use crate::snapshot::structs::torrent_record::TorrentRecord;

pub const SESSION_ID_HEADER: &str = "X-Transmission-Session-Id";
pub const DEFAULT_RPC_PATH: &str = "/transmission/rpc";

const TORRENT_FIELDS: [&str; 7] = ["hashString", "name", "totalSize", "downloadedEver", "uploadedEver", "trackers", "status"];

impl TransmissionClient {
    pub fn new(config: &ClientConfig) -> Result<TransmissionClient, BackendError>
    {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(TransmissionClient {
            name: config.name.clone(),
            rpc_url: rpc_url(&config.url),
            username: config.username.clone(),
            password: config.password.clone(),
            http,
            session_id: RwLock::new(None),
        })
    }

    pub fn session_id(&self) -> Option<String>
    {
        self.session_id.read().clone()
    }

    async fn send(&self, method: &str, arguments: serde_json::Value) -> Result<Response, BackendError>
    {
        let mut request = self.http
            .post(&self.rpc_url)
            .json(&TransmissionRequest { method, arguments });
        if let Some(session_id) = self.session_id() {
            request = request.header(SESSION_ID_HEADER, session_id);
        }
        if !self.username.is_empty() {
            request = request.basic_auth(&self.username, Some(&self.password));
        }
        Ok(request.send().await?)
    }

    fn store_session_id(&self, response: &Response)
    {
        let session_id = response.headers()
            .get(SESSION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        *self.session_id.write() = session_id;
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, BackendError>
    {
        match response.status() {
            StatusCode::CONFLICT => {
                self.store_session_id(&response);
                Err(BackendError::Authentication(String::from("session id expired")))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(BackendError::Authentication(format!("rpc rejected with {}", response.status())))
            }
            status if !status.is_success() => Err(BackendError::Transport(format!("rpc returned {status}"))),
            _ => {
                let body = response.json::<TransmissionResponse<T>>().await?;
                if body.result != "success" {
                    return Err(BackendError::Transport(format!("rpc result '{}'", body.result)));
                }
                body.arguments.ok_or_else(|| BackendError::Decode(String::from("rpc response has no arguments")))
            }
        }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, arguments: serde_json::Value) -> Result<T, BackendError>
    {
        let response = self.send(method, arguments).await?;
        self.decode(response).await
    }

    async fn free_space(&self) -> Result<u64, BackendError>
    {
        let session: TransmissionSessionGet = self.call("session-get", json!({ "fields": ["download-dir"] })).await?;
        let path = session.download_dir.ok_or_else(|| BackendError::Decode(String::from("session has no download-dir")))?;
        let free_space: TransmissionFreeSpace = self.call("free-space", json!({ "path": path })).await?;
        u64::try_from(free_space.size_bytes).map_err(|_| BackendError::Decode(format!("negative free space {}", free_space.size_bytes)))
    }
}

/// RPC endpoint for a configured client url. A url without a path gets the
/// default RPC path appended.
pub fn rpc_url(url: &str) -> String
{
    let trimmed = url.trim_end_matches('/');
    match url::Url::parse(trimmed) {
        Ok(parsed) if parsed.path() == "/" || parsed.path().is_empty() => format!("{trimmed}{DEFAULT_RPC_PATH}"),
        _ => trimmed.to_string(),
    }
}

#[async_trait]
impl PollableBackend for TransmissionClient {
    async fn login(&self) -> Result<(), BackendError> {
        let arguments = json!({ "fields": ["version"] });
        let mut response = self.send("session-get", arguments.clone()).await?;
        if response.status() == StatusCode::CONFLICT {
            self.store_session_id(&response);
            response = self.send("session-get", arguments).await?;
        }
        let session: TransmissionSessionGet = self.decode(response).await?;
        info!("[TRANSMISSION {}] Connected, version {}", self.name, session.version.as_deref().unwrap_or("unknown"));
        Ok(())
    }

    async fn fetch_status(&self) -> Result<GlobalStatus, BackendError> {
        let stats: TransmissionSessionStats = self.call("session-stats", json!({})).await?;
        let free_space = match self.free_space().await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                debug!("[TRANSMISSION {}] Free space unavailable: {e}", self.name);
                None
            }
        };
        Ok(stats.global_status(free_space))
    }

    async fn fetch_torrents(&self) -> Result<Vec<TorrentRecord>, BackendError> {
        let list: TransmissionTorrentList = self.call("torrent-get", json!({ "fields": TORRENT_FIELDS })).await?;
        Ok(list.torrents.into_iter().map(|torrent| torrent.into_record()).collect())
    }
}
