use std::collections::BTreeMap;
use crate::metrics::structs::aggregated_count::AggregatedCount;

/// Counts (status label, tracker) pairs in a single pass. The result is
/// sorted by status then tracker and does not depend on input order.
pub fn aggregate<I, S, T>(records: I) -> Vec<AggregatedCount>
where
    I: IntoIterator<Item = (S, T)>,
    S: Into<String>,
    T: Into<String>,
{
    let mut grouped: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();
    for (status, tracker) in records {
        *grouped.entry(status.into()).or_default().entry(tracker.into()).or_insert(0) += 1;
    }

    let mut counts = Vec::new();
    for (status, trackers) in grouped {
        for (tracker, count) in trackers {
            counts.push(AggregatedCount { status: status.clone(), tracker, count });
        }
    }
    counts
}
