use async_trait::async_trait;
use log::{debug, info};
use parking_lot::RwLock;
use reqwest::header::{COOKIE, REFERER, SET_COOKIE};
use reqwest::StatusCode;
use crate::backend::errors::BackendError;
use crate::backend::structs::qbittorrent_client::QbittorrentClient;
use crate::backend::structs::qbittorrent_maindata::QbittorrentMainData;
use crate::backend::traits::pollable_backend::PollableBackend;
use crate::config::structs::client_config::ClientConfig;
use crate::snapshot::structs::backend_snapshot::BackendSnapshot;
use crate::snapshot::structs::global_status::GlobalStatus;
use crate::snapshot::structs::torrent_record::TorrentRecord;

impl QbittorrentClient {
    pub fn new(config: &ClientConfig) -> Result<QbittorrentClient, BackendError>
    {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(QbittorrentClient {
            name: config.name.clone(),
            base_url: config.url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            http,
            sid: RwLock::new(None),
        })
    }

    pub fn is_logged_in(&self) -> bool
    {
        self.sid.read().is_some()
    }

    pub async fn maindata(&self) -> Result<QbittorrentMainData, BackendError>
    {
        let sid = self.sid.read().clone();
        let Some(sid) = sid else {
            return Err(BackendError::Authentication(String::from("no session cookie")));
        };
        let response = self.http
            .get(format!("{}/api/v2/sync/maindata", self.base_url))
            .header(COOKIE, format!("SID={sid}"))
            .send()
            .await?;
        match response.status() {
            StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
                *self.sid.write() = None;
                Err(BackendError::Authentication(format!("maindata rejected with {}", response.status())))
            }
            status if !status.is_success() => Err(BackendError::Transport(format!("maindata returned {status}"))),
            _ => Ok(response.json::<QbittorrentMainData>().await?),
        }
    }
}

/// Value of the `SID` cookie among the `Set-Cookie` headers, if any.
pub fn session_cookie(headers: &reqwest::header::HeaderMap) -> Option<String>
{
    headers.get_all(SET_COOKIE).iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .filter_map(|pair| pair.trim().strip_prefix("SID="))
        .find(|sid| !sid.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl PollableBackend for QbittorrentClient {
    async fn login(&self) -> Result<(), BackendError> {
        let response = self.http
            .post(format!("{}/api/v2/auth/login", self.base_url))
            .header(REFERER, self.base_url.as_str())
            .form(&[("username", self.username.as_str()), ("password", self.password.as_str())])
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(BackendError::Authentication(String::from("login refused, too many failed attempts")));
        }
        if !status.is_success() {
            return Err(BackendError::Transport(format!("login returned {status}")));
        }
        let sid = session_cookie(response.headers());
        let body = response.text().await?;
        match (body.trim(), sid) {
            ("Ok.", Some(sid)) => {
                *self.sid.write() = Some(sid);
                info!("[QBITTORRENT {}] Logged in", self.name);
                Ok(())
            }
            ("Ok.", None) => Err(BackendError::Authentication(String::from("login succeeded without a session cookie"))),
            (body, _) => {
                debug!("[QBITTORRENT {}] Login rejected: {body}", self.name);
                Err(BackendError::Authentication(String::from("invalid username or password")))
            }
        }
    }

    async fn fetch_status(&self) -> Result<GlobalStatus, BackendError> {
        Ok(self.maindata().await?.global_status())
    }

    async fn fetch_torrents(&self) -> Result<Vec<TorrentRecord>, BackendError> {
        Ok(self.maindata().await?.torrent_records())
    }

    async fn poll(&self) -> Result<BackendSnapshot, BackendError> {
        Ok(self.maindata().await?.into_snapshot())
    }
}
