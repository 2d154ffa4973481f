#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AggregatedCount {
    pub status: String,
    pub tracker: String,
    pub count: u64,
}
