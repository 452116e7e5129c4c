use anyhow::{Context, Result};
use serde::Serialize;

use raffle_model::{Allocation, Prize, PrizeInsight};

use crate::ResultRenderer;
use crate::rows::{ResultRow, insight_rows, result_rows};

/// Comma-separated output with a header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

/// One line of the combined report: a result row, widened with one ranked
/// insight entry when insights are requested.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    position: usize,
    prize: &'a str,
    number: i64,
    winner: Option<&'a str>,
    guess: Option<i64>,
    ties: &'a str,
    rank: Option<usize>,
    submitter: Option<&'a str>,
    submitter_guess: Option<i64>,
    distance: Option<u64>,
    tied: Option<bool>,
}

impl<'a> ReportRow<'a> {
    fn bare(result: &'a ResultRow) -> Self {
        Self {
            position: result.position,
            prize: &result.prize,
            number: result.number,
            winner: result.winner.as_deref(),
            guess: result.guess,
            ties: &result.ties,
            rank: None,
            submitter: None,
            submitter_guess: None,
            distance: None,
            tied: None,
        }
    }
}

fn write_rows<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).context("write csv row")?;
    }
    let bytes = writer.into_inner().context("flush csv output")?;
    String::from_utf8(bytes).context("csv output is not utf-8")
}

fn report_rows<'a>(
    results: &'a [ResultRow],
    insights: &'a [PrizeInsight],
) -> Vec<ReportRow<'a>> {
    let mut rows = Vec::new();
    for result in results {
        let entries = insights
            .iter()
            .find(|insight| insight.position == result.position)
            .map(|insight| insight.entries.as_slice())
            .unwrap_or_default();
        if entries.is_empty() {
            rows.push(ReportRow::bare(result));
            continue;
        }
        for (index, entry) in entries.iter().enumerate() {
            rows.push(ReportRow {
                rank: Some(index + 1),
                submitter: Some(&entry.record.submitter_name),
                submitter_guess: Some(entry.record.guess),
                distance: Some(entry.record.distance),
                tied: Some(entry.tied),
                ..ReportRow::bare(result)
            });
        }
    }
    rows
}

impl ResultRenderer for CsvRenderer {
    fn render_prizes(&self, prizes: &[Prize]) -> Result<String> {
        write_rows(prizes)
    }

    fn render_results(&self, allocations: &[Allocation]) -> Result<String> {
        write_rows(&result_rows(allocations))
    }

    fn render_insights(&self, insights: &[PrizeInsight]) -> Result<String> {
        write_rows(&insight_rows(insights))
    }

    /// A single table: prize numbers and winners already appear on every
    /// result row, so the prize list is not repeated.
    fn render_report(
        &self,
        _prizes: &[Prize],
        allocations: &[Allocation],
        insights: Option<&[PrizeInsight]>,
    ) -> Result<String> {
        let results = result_rows(allocations);
        match insights {
            Some(insights) => write_rows(&report_rows(&results, insights)),
            None => write_rows(&results),
        }
    }
}
