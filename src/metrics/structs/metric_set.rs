use crate::metrics::structs::metric_family::MetricFamily;

/// Families keep the order in which their first sample was added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSet {
    pub families: Vec<MetricFamily>,
}
