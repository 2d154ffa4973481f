use std::collections::BTreeMap;
use crate::metrics::enums::metric_kind::MetricKind;

pub type LabelSet = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricFamily {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub samples: BTreeMap<LabelSet, f64>,
}
