use async_trait::async_trait;
use crate::backend::errors::BackendError;
use crate::snapshot::structs::backend_snapshot::BackendSnapshot;
use crate::snapshot::structs::global_status::GlobalStatus;
use crate::snapshot::structs::torrent_record::TorrentRecord;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PollableBackend: Send + Sync {
    async fn login(&self) -> Result<(), BackendError>;

    async fn fetch_status(&self) -> Result<GlobalStatus, BackendError>;

    async fn fetch_torrents(&self) -> Result<Vec<TorrentRecord>, BackendError>;

    async fn poll(&self) -> Result<BackendSnapshot, BackendError> {
        let status = self.fetch_status().await?;
        let torrents = self.fetch_torrents().await?;
        Ok(BackendSnapshot::new(status, torrents))
    }
}
