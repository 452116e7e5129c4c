//! Closest-match allocation for a single prize.
//!
//! # Tie-break rule
//!
//! Submissions are scanned in input order and the winner only changes on a
//! strictly smaller distance, so among equally close submissions the first one
//! in input order wins. Every other submitter at the winning distance is
//! reported in [`AllocationOutcome::ties`] for human review; ties never change
//! the winner.

use std::collections::BTreeSet;

use raffle_model::{AllocationOutcome, DistanceRecord, Submission};

/// Matches `prize_number` against every submission whose submitter is not in
/// `excluded`.
///
/// Returns the winning submission (if any eligible submission exists), the
/// distance of every eligible submission in input order, and the names of
/// other submitters tied at the winning distance. Inputs are not modified.
pub fn allocate(
    prize_number: i64,
    submissions: &[Submission],
    excluded: &BTreeSet<String>,
) -> AllocationOutcome {
    let eligible: Vec<&Submission> = submissions
        .iter()
        .filter(|submission| !excluded.contains(&submission.submitter_name))
        .collect();
    let distances: Vec<DistanceRecord> = eligible
        .iter()
        .map(|submission| DistanceRecord::measure(prize_number, submission))
        .collect();

    let Some(winner_index) = first_closest(&distances) else {
        return AllocationOutcome::default();
    };
    let winner = eligible[winner_index].clone();
    let ties = tied_names(&distances, distances[winner_index].distance, &winner.submitter_name);

    AllocationOutcome {
        winner: Some(winner),
        distances,
        ties,
    }
}

/// Index of the first record with the minimum distance.
fn first_closest(distances: &[DistanceRecord]) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (index, record) in distances.iter().enumerate() {
        match best {
            Some((_, closest)) if record.distance >= closest => {}
            _ => best = Some((index, record.distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Distinct names at `distance`, excluding the winner's own name.
fn tied_names(distances: &[DistanceRecord], distance: u64, winner_name: &str) -> Vec<String> {
    let mut ties: Vec<String> = Vec::new();
    for record in distances {
        if record.distance != distance || record.submitter_name == winner_name {
            continue;
        }
        if !ties.contains(&record.submitter_name) {
            ties.push(record.submitter_name.clone());
        }
    }
    ties
}
