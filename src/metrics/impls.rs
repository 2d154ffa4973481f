//! Implementation blocks for metric types.

pub mod emitter_options;
pub mod metric_emitter;
pub mod metric_family;
pub mod metric_kind;
pub mod metric_names;
pub mod metric_set;
pub mod naming_scheme;
