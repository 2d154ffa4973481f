use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use log::{debug, error, info, warn};
use tokio::sync::Mutex;
use crate::backend::connector::{build_backend, client_host};
use crate::backend::errors::BackendError;
use crate::backend::traits::pollable_backend::PollableBackend;
use crate::collector::enums::session_state::SessionState;
use crate::collector::structs::collector_registry::CollectorRegistry;
use crate::config::structs::client_config::ClientConfig;
use crate::metrics::structs::emitter_options::EmitterOptions;
use crate::metrics::structs::metric_emitter::MetricEmitter;
use crate::metrics::structs::metric_set::MetricSet;
use crate::snapshot::structs::backend_snapshot::BackendSnapshot;

impl CollectorRegistry {
    pub fn new(name: &str, backend: Box<dyn PollableBackend>, emitter: MetricEmitter) -> CollectorRegistry
    {
        CollectorRegistry {
            name: name.to_string(),
            backend,
            emitter,
            state: Mutex::new(SessionState::Unauthenticated),
        }
    }

    pub fn from_config(config: &ClientConfig, options: Arc<EmitterOptions>) -> Result<CollectorRegistry, BackendError>
    {
        let backend = build_backend(config)?;
        let emitter = MetricEmitter::new(config.kind, &config.name, &client_host(&config.url), options);
        Ok(CollectorRegistry::new(&config.name, backend, emitter))
    }

    pub fn name(&self) -> &str
    {
        &self.name
    }

    pub async fn session_state(&self) -> SessionState
    {
        *self.state.lock().await
    }

    /// Runs one poll-and-emit cycle. Never fails: backend errors degrade to
    /// the failure metric set.
    pub async fn scrape(&self) -> MetricSet
    {
        let mut state = self.state.lock().await;
        let snapshot = self.collect(&mut state).await;
        self.emitter.emit(snapshot.as_ref())
    }

    async fn collect(&self, state: &mut SessionState) -> Option<BackendSnapshot>
    {
        if *state == SessionState::Unauthenticated {
            match self.backend.login().await {
                Ok(()) => {
                    info!("[COLLECTOR {}] Authenticated", self.name);
                    *state = SessionState::Authenticated;
                }
                Err(e) => {
                    error!("[COLLECTOR {}] Login failed: {e}", self.name);
                    return None;
                }
            }
        }

        match self.backend.poll().await {
            Ok(snapshot) => {
                debug!("[COLLECTOR {}] Polled {} torrents", self.name, snapshot.torrents.len());
                Some(snapshot)
            }
            Err(e) if e.is_authentication() => {
                warn!("[COLLECTOR {}] Session rejected, logging in on next scrape: {e}", self.name);
                *state = SessionState::Unauthenticated;
                None
            }
            Err(e) => {
                error!("[COLLECTOR {}] Poll failed: {e}", self.name);
                None
            }
        }
    }
}

impl fmt::Debug for CollectorRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectorRegistry")
            .field("name", &self.name)
            .field("scheme", &self.emitter.scheme())
            .finish()
    }
}
