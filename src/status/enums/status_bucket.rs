use crate::status::enums::canonical_status::CanonicalStatus;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusBucket {
    Canonical(CanonicalStatus),
    Unrecognized(String),
}
