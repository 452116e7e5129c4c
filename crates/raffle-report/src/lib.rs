//! Raffle result rendering.
//!
//! Renderers turn drawn prizes, allocations and insight rankings into text:
//!
//! - **Table**: styled terminal tables for interactive use
//! - **JSON**: pretty-printed documents for machine parsing
//! - **CSV**: flat rows for spreadsheets

mod csv_output;
mod json;
mod rows;
mod table;

use anyhow::Result;

use raffle_model::{Allocation, Prize, PrizeInsight};

pub use csv_output::CsvRenderer;
pub use json::JsonRenderer;
pub use rows::{InsightRow, ResultRow, insight_rows, result_rows};
pub use table::TableRenderer;

/// Output strategy for the three raffle views.
pub trait ResultRenderer {
    fn render_prizes(&self, prizes: &[Prize]) -> Result<String>;
    fn render_results(&self, allocations: &[Allocation]) -> Result<String>;
    fn render_insights(&self, insights: &[PrizeInsight]) -> Result<String>;

    /// Full report: prizes, results and, when given, insights.
    fn render_report(
        &self,
        prizes: &[Prize],
        allocations: &[Allocation],
        insights: Option<&[PrizeInsight]>,
    ) -> Result<String> {
        let mut sections = vec![self.render_prizes(prizes)?, self.render_results(allocations)?];
        if let Some(insights) = insights {
            sections.push(self.render_insights(insights)?);
        }
        Ok(sections.join("\n"))
    }
}

/// One-line count of awarded prizes, e.g. `2 of 3 prizes awarded`.
pub fn summary_line(allocations: &[Allocation]) -> String {
    let awarded = allocations.iter().filter(|a| a.has_winner()).count();
    let total = allocations.len();
    let noun = if total == 1 { "prize" } else { "prizes" };
    format!("{awarded} of {total} {noun} awarded")
}
