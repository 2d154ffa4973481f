use tokio::sync::Mutex;
use crate::backend::traits::pollable_backend::PollableBackend;
use crate::collector::enums::session_state::SessionState;
use crate::metrics::structs::metric_emitter::MetricEmitter;

pub struct CollectorRegistry {
    pub(crate) name: String,
    pub(crate) backend: Box<dyn PollableBackend>,
    pub(crate) emitter: MetricEmitter,
    pub(crate) state: Mutex<SessionState>,
}
