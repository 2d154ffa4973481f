//! Metric enumerations.

/// Prometheus metric type of a family.
pub mod metric_kind;

/// Detailed or compatibility naming scheme.
pub mod naming_scheme;
