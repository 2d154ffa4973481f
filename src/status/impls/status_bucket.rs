use std::borrow::Cow;
use crate::config::enums::client_kind::ClientKind;
use crate::status::enums::canonical_status::CanonicalStatus;
use crate::status::enums::status_bucket::StatusBucket;

/// Ordinal reported for native statuses that no table recognizes.
pub const UNRECOGNIZED_STATUS_ORDINAL: u8 = 10;

impl StatusBucket {
    pub fn classify(kind: ClientKind, native: &str) -> StatusBucket
    {
        match CanonicalStatus::lookup(kind, native) {
            Some(status) => StatusBucket::Canonical(status),
            None => StatusBucket::Unrecognized(native.to_string()),
        }
    }

    pub fn canonical(&self) -> CanonicalStatus
    {
        match self {
            StatusBucket::Canonical(status) => *status,
            StatusBucket::Unrecognized(_) => CanonicalStatus::Unknown,
        }
    }

    pub fn ordinal(&self) -> u8
    {
        match self {
            StatusBucket::Canonical(status) => status.ordinal(),
            StatusBucket::Unrecognized(_) => UNRECOGNIZED_STATUS_ORDINAL,
        }
    }

    pub fn label(&self, locale: &str) -> Cow<'_, str>
    {
        match self {
            StatusBucket::Canonical(status) => Cow::Borrowed(status.render(locale)),
            StatusBucket::Unrecognized(native) => Cow::Borrowed(native.as_str()),
        }
    }
}
