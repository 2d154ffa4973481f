//! Metric data structures.

/// One (status, tracker) torrent count.
pub mod aggregated_count;

/// Settings shared by every emitter.
pub mod emitter_options;

/// Builds the metric set of one scrape for one client.
pub mod metric_emitter;

/// All samples of one metric name.
pub mod metric_family;

/// Fully qualified metric names for a naming scheme.
pub mod metric_names;

/// The output of one scrape.
pub mod metric_set;
