#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalStatus {
    Unknown,
    Allocating,
    Downloading,
    Uploading,
    Checking,
    Errored,
    Stalled,
    Queued,
    Paused,
    Moving,
}
