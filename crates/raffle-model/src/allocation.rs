//! Allocation results and the audit views derived from them.

use serde::{Deserialize, Serialize};

use crate::entry::{Prize, Submission};

/// Distance between one eligible submission and a prize number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceRecord {
    pub submitter_name: String,
    pub guess: i64,
    pub distance: u64,
}

impl DistanceRecord {
    pub fn measure(prize_number: i64, submission: &Submission) -> Self {
        Self {
            submitter_name: submission.submitter_name.clone(),
            guess: submission.guess,
            distance: submission.distance_to(prize_number),
        }
    }
}

/// Result of matching a single prize number against the eligible pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    pub winner: Option<Submission>,
    /// Eligible submissions in input order.
    pub distances: Vec<DistanceRecord>,
    /// Other submitter names sharing the winning distance, in input order.
    pub ties: Vec<String>,
}

/// Per-prize allocation record kept for reporting and audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// 1-based position of the prize in draw order. Identifies the prize.
    pub position: usize,
    pub prize: Prize,
    pub winner: Option<Submission>,
    pub distances: Vec<DistanceRecord>,
    pub ties: Vec<String>,
}

impl Allocation {
    pub fn from_outcome(position: usize, prize: Prize, outcome: AllocationOutcome) -> Self {
        Self {
            position,
            prize,
            winner: outcome.winner,
            distances: outcome.distances,
            ties: outcome.ties,
        }
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn has_ties(&self) -> bool {
        !self.ties.is_empty()
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner
            .as_ref()
            .map(|submission| submission.submitter_name.as_str())
    }

    pub fn is_tied(&self, submitter_name: &str) -> bool {
        self.ties.iter().any(|name| name == submitter_name)
    }

    pub fn key(&self) -> PrizeKey {
        PrizeKey {
            position: self.position,
            name: self.prize.name.clone(),
        }
    }
}

/// Prize identity in insight views: position first, so equal names stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PrizeKey {
    pub position: usize,
    pub name: String,
}

/// One row of a prize's proximity ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    #[serde(flatten)]
    pub record: DistanceRecord,
    pub tied: bool,
}

/// Ranked closest submissions for a single prize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeInsight {
    pub position: usize,
    pub prize: Prize,
    pub entries: Vec<RankedEntry>,
}
