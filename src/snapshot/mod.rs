//! Backend snapshot data contract.
//!
//! A snapshot is what a download client connector hands to the exporter core
//! after one successful poll: global transfer counters plus the ordered list of
//! torrents. Snapshots are built fresh for every scrape and dropped once the
//! metric set for that scrape has been emitted.

/// Snapshot data structures.
pub mod structs;

/// Implementation blocks for snapshot types.
pub mod impls;
