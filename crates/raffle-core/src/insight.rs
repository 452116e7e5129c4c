//! Proximity rankings derived from recorded allocations.
//!
//! Rankings reuse the distances captured when each prize was allocated, so a
//! prize's ranking only lists submitters that were still eligible at that
//! point in the pass.

use std::collections::BTreeMap;

use raffle_model::{Allocation, PrizeInsight, PrizeKey, RankedEntry};

/// Closest `top_n` recorded submissions for one allocation, stable-sorted by
/// distance so equal distances keep input order.
pub fn rank_distances(allocation: &Allocation, top_n: usize) -> Vec<RankedEntry> {
    let mut records: Vec<_> = allocation.distances.iter().collect();
    records.sort_by_key(|record| record.distance);
    records
        .into_iter()
        .take(top_n)
        .map(|record| RankedEntry {
            record: record.clone(),
            tied: allocation.is_tied(&record.submitter_name),
        })
        .collect()
}

/// Rankings keyed by prize position and name.
pub fn top_n_insights(
    allocations: &[Allocation],
    top_n: usize,
) -> BTreeMap<PrizeKey, Vec<RankedEntry>> {
    allocations
        .iter()
        .map(|allocation| (allocation.key(), rank_distances(allocation, top_n)))
        .collect()
}

/// Rankings in prize order, with the prize attached.
pub fn prize_insights(allocations: &[Allocation], top_n: usize) -> Vec<PrizeInsight> {
    allocations
        .iter()
        .map(|allocation| PrizeInsight {
            position: allocation.position,
            prize: allocation.prize.clone(),
            entries: rank_distances(allocation, top_n),
        })
        .collect()
}
