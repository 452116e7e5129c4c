//! Flat row views shared by the JSON and CSV renderers.

use serde::Serialize;

use raffle_model::{Allocation, PrizeInsight};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub position: usize,
    pub prize: String,
    pub number: i64,
    pub winner: Option<String>,
    pub guess: Option<i64>,
    /// Tied submitter names joined with `; `.
    pub ties: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightRow {
    pub position: usize,
    pub prize: String,
    pub number: i64,
    pub rank: usize,
    pub submitter: String,
    pub guess: i64,
    pub distance: u64,
    pub tied: bool,
}

pub fn result_rows(allocations: &[Allocation]) -> Vec<ResultRow> {
    allocations
        .iter()
        .map(|allocation| ResultRow {
            position: allocation.position,
            prize: allocation.prize.name.clone(),
            number: allocation.prize.assigned_number,
            winner: allocation.winner_name().map(str::to_string),
            guess: allocation.winner.as_ref().map(|winner| winner.guess),
            ties: allocation.ties.join("; "),
        })
        .collect()
}

pub fn insight_rows(insights: &[PrizeInsight]) -> Vec<InsightRow> {
    let mut rows = Vec::new();
    for insight in insights {
        for (index, entry) in insight.entries.iter().enumerate() {
            rows.push(InsightRow {
                position: insight.position,
                prize: insight.prize.name.clone(),
                number: insight.prize.assigned_number,
                rank: index + 1,
                submitter: entry.record.submitter_name.clone(),
                guess: entry.record.guess,
                distance: entry.record.distance,
                tied: entry.tied,
            });
        }
    }
    rows
}
