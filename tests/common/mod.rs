#![allow(dead_code)]
use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use parking_lot::Mutex;
use pt_exporter::backend::errors::BackendError;
use pt_exporter::backend::traits::pollable_backend::PollableBackend;
use pt_exporter::collector::structs::collector_registry::CollectorRegistry;
use pt_exporter::config::enums::client_kind::ClientKind;
use pt_exporter::metrics::enums::naming_scheme::NamingScheme;
use pt_exporter::metrics::structs::emitter_options::EmitterOptions;
use pt_exporter::metrics::structs::metric_emitter::MetricEmitter;
use pt_exporter::snapshot::structs::backend_snapshot::BackendSnapshot;
use pt_exporter::snapshot::structs::global_status::GlobalStatus;
use pt_exporter::snapshot::structs::torrent_record::TorrentRecord;

/// Scripted backend. Unscripted calls succeed; an unscripted poll returns an
/// empty snapshot.
#[derive(Clone, Default)]
pub struct FakeBackend {
    pub logins: Arc<AtomicUsize>,
    pub polls: Arc<AtomicUsize>,
    pub login_script: Arc<Mutex<VecDeque<Result<(), BackendError>>>>,
    pub poll_script: Arc<Mutex<VecDeque<Result<BackendSnapshot, BackendError>>>>,
}

impl FakeBackend {
    pub fn new() -> FakeBackend {
        FakeBackend::default()
    }

    pub fn push_login(&self, result: Result<(), BackendError>) {
        self.login_script.lock().push_back(result);
    }

    pub fn push_poll(&self, result: Result<BackendSnapshot, BackendError>) {
        self.poll_script.lock().push_back(result);
    }

    pub fn login_count(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }

    pub fn poll_count(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PollableBackend for FakeBackend {
    async fn login(&self) -> Result<(), BackendError> {
        self.logins.fetch_add(1, Ordering::SeqCst);
        let scripted = self.login_script.lock().pop_front();
        scripted.unwrap_or(Ok(()))
    }

    async fn fetch_status(&self) -> Result<GlobalStatus, BackendError> {
        Ok(self.poll().await?.status)
    }

    async fn fetch_torrents(&self) -> Result<Vec<TorrentRecord>, BackendError> {
        Ok(self.poll().await?.torrents)
    }

    async fn poll(&self) -> Result<BackendSnapshot, BackendError> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.poll_script.lock().pop_front();
        scripted.unwrap_or_else(|| Ok(BackendSnapshot::new(GlobalStatus::default(), vec![])))
    }
}

pub fn options(scheme: NamingScheme, rewrite: &[(&str, &str)]) -> Arc<EmitterOptions> {
    let rewrite_tracker: BTreeMap<String, String> = rewrite.iter()
        .map(|(host, alias)| (host.to_string(), alias.to_string()))
        .collect();
    Arc::new(EmitterOptions {
        scheme,
        lang: String::from("zh"),
        rewrite_tracker,
        use_category_as_tracker: false,
        max_download_speed: 0,
        max_upload_speed: 0,
    })
}

pub fn registry(name: &str, backend: FakeBackend, options: Arc<EmitterOptions>) -> CollectorRegistry {
    let emitter = MetricEmitter::new(ClientKind::qbittorrent, name, "127.0.0.1:8080", options);
    CollectorRegistry::new(name, Box::new(backend), emitter)
}

pub fn torrent(hash: &str, name: &str, announce: &str, state: &str) -> TorrentRecord {
    TorrentRecord {
        hash: Some(hash.to_string()),
        name: name.to_string(),
        size: 1024,
        downloaded: 512,
        uploaded: 256,
        tracker: announce.to_string(),
        category: None,
        state: state.to_string(),
    }
}

pub fn snapshot(torrents: Vec<TorrentRecord>) -> BackendSnapshot {
    BackendSnapshot::new(
        GlobalStatus {
            downloaded: 1000,
            uploaded: 2000,
            download_speed: 10,
            upload_speed: 20,
            free_space_on_disk: Some(4096),
        },
        torrents,
    )
}

/// Constant labels of a registry built by [`registry`].
pub fn const_labels<'a>(name: &'a str, scheme: NamingScheme) -> Vec<(&'a str, &'a str)> {
    let mut labels = vec![("name", name), ("host", "127.0.0.1:8080"), ("client", "qbittorrent")];
    if scheme == NamingScheme::Compatibility {
        labels.push(("version", "v0.0.0"));
    }
    labels
}

pub fn labels<'a>(name: &'a str, scheme: NamingScheme, extra: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    let mut labels = const_labels(name, scheme);
    labels.extend_from_slice(extra);
    labels
}
