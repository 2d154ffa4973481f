//! Snapshot data structures.

/// A full poll result (global status and torrents).
pub mod backend_snapshot;

/// Client-wide transfer counters.
pub mod global_status;

/// A single torrent as reported by a client.
pub mod torrent_record;
