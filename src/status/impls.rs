pub mod canonical_status;
pub mod status_bucket;
