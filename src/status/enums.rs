//! Status enumerations.

/// Backend-independent torrent status.
pub mod canonical_status;

/// Canonical status or the raw native string it could not be mapped from.
pub mod status_bucket;
