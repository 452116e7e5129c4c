use anyhow::{Context, Result};
use serde::Serialize;

use raffle_model::{Allocation, Prize, PrizeInsight};

use crate::ResultRenderer;
use crate::rows::{ResultRow, result_rows};

#[derive(Serialize)]
struct Report<'a> {
    prizes: &'a [Prize],
    results: Vec<ResultRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    insights: Option<&'a [PrizeInsight]>,
}

/// Pretty-printed JSON output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ResultRenderer for JsonRenderer {
    fn render_prizes(&self, prizes: &[Prize]) -> Result<String> {
        serde_json::to_string_pretty(prizes).context("serialize prizes")
    }

    fn render_results(&self, allocations: &[Allocation]) -> Result<String> {
        serde_json::to_string_pretty(&result_rows(allocations)).context("serialize results")
    }

    fn render_insights(&self, insights: &[PrizeInsight]) -> Result<String> {
        serde_json::to_string_pretty(insights).context("serialize insights")
    }

    fn render_report(
        &self,
        prizes: &[Prize],
        allocations: &[Allocation],
        insights: Option<&[PrizeInsight]>,
    ) -> Result<String> {
        let report = Report {
            prizes,
            results: result_rows(allocations),
            insights,
        };
        serde_json::to_string_pretty(&report).context("serialize report")
    }
}
