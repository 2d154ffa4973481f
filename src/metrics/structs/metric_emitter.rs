use std::sync::Arc;
use crate::config::enums::client_kind::ClientKind;
use crate::metrics::structs::emitter_options::EmitterOptions;
use crate::metrics::structs::metric_names::MetricNames;

/// Emits the metric set of a single client. Constant labels are computed once
/// at construction and prefixed to every sample.
#[derive(Debug, Clone)]
pub struct MetricEmitter {
    pub(crate) kind: ClientKind,
    pub(crate) options: Arc<EmitterOptions>,
    pub(crate) names: MetricNames,
    pub(crate) const_labels: Vec<(String, String)>,
}
