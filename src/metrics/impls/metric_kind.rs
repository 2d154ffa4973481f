use std::fmt;
use std::fmt::Formatter;
use crate::metrics::enums::metric_kind::MetricKind;

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MetricKind::Counter => write!(f, "counter"),
            MetricKind::Gauge => write!(f, "gauge"),
        }
    }
}
