//! Torrent status normalization.
//!
//! Every download client reports torrent state in its own vocabulary. This
//! module folds those vocabularies into one canonical status set, renders the
//! canonical statuses as label text in the configured language, and provides
//! the fixed numeric ordinal used by the detailed naming scheme.
//!
//! # Vocabularies
//!
//! - **qBittorrent**: `downloading`, `metaDL`, `forcedDL`, `stalledUP`, `queuedDL`, ...
//! - **Transmission**: `downloading`, `seeding`, `check pending`, `stopped`, ...
//!
//! Native strings that no table knows are kept as [`StatusBucket::Unrecognized`]
//! so the compatibility scheme can still count them under their raw name.
//!
//! [`StatusBucket::Unrecognized`]: crate::status::enums::status_bucket::StatusBucket::Unrecognized

/// Status enumerations.
pub mod enums;

/// Lookup tables, rendering and ordinals.
pub mod impls;
