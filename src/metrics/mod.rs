//! Metric normalization, aggregation and emission.
//!
//! This is the heart of the exporter. For every scrape a [`MetricEmitter`]
//! turns one backend snapshot (or a failed poll) into a [`MetricSet`]: a
//! deduplicated mapping from metric name and label set to a value, rendered
//! in the Prometheus text exposition format.
//!
//! # Naming schemes
//!
//! Two mutually exclusive schemes are chosen once at start-up:
//!
//! - **Detailed** (`pt_*`): one series per torrent and metric, labeled by
//!   `torrent_hash`, `torrent_name` and `tracker`, including the torrent's status
//!   as a numeric ordinal.
//! - **Compatibility** (`downloader_*`): torrents are counted per
//!   (`status`, `tracker`) pair; per-torrent byte counters keep only the
//!   `torrent_name` and `tracker` labels. Configured maximum bandwidth gauges
//!   are not exposed in this scheme.
//!
//! # Failure path
//!
//! A failed poll yields only `*_up 0` (plus the static bandwidth gauges in the
//! detailed scheme). Nothing from earlier scrapes is ever replayed.
//!
//! [`MetricEmitter`]: crate::metrics::structs::metric_emitter::MetricEmitter
//! [`MetricSet`]: crate::metrics::structs::metric_set::MetricSet

/// Status/tracker count folding for the compatibility scheme.
pub mod aggregator;

/// Metric enumerations (naming scheme, metric kind).
pub mod enums;

/// Implementation blocks for metric types.
pub mod impls;

/// Metric data structures.
pub mod structs;
