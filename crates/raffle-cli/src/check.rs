//! The `check` command: validate input files without drawing.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use raffle_ingest::{SkippedLine, read_prize_file, read_submission_file};
use raffle_model::NumberRange;

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub prize_count: Option<usize>,
    pub submission_count: Option<usize>,
    /// Skipped lines tagged with the file they came from.
    pub skipped: Vec<(String, SkippedLine)>,
    /// Set when there are more prizes than numbers to draw from.
    pub too_many_prizes: bool,
}

impl CheckReport {
    pub fn has_problems(&self) -> bool {
        self.too_many_prizes || !self.skipped.is_empty()
    }
}

/// Parses the given files and writes a summary to `out`.
///
/// # Errors
///
/// Fails when a file is missing or unreadable, or `out` cannot be written.
pub fn run_check<W: Write>(
    prizes: Option<&Path>,
    entries: Option<&Path>,
    range: NumberRange,
    out: &mut W,
) -> Result<CheckReport> {
    let mut report = CheckReport::default();
    if let Some(path) = prizes {
        let import = read_prize_file(path)
            .with_context(|| format!("check prizes in {}", path.display()))?;
        writeln!(out, "Prizes: {} in {}", import.names.len(), path.display())?;
        report.too_many_prizes = import.names.len() as u64 > range.size();
        if report.too_many_prizes {
            writeln!(
                out,
                "Too many prizes: only {} unique numbers available ({}-{})",
                range.size(),
                range.low,
                range.high
            )?;
        }
        report.prize_count = Some(import.names.len());
        let file = path.display().to_string();
        report
            .skipped
            .extend(import.skipped.into_iter().map(|line| (file.clone(), line)));
    }
    if let Some(path) = entries {
        let import = read_submission_file(path)
            .with_context(|| format!("check submissions in {}", path.display()))?;
        writeln!(
            out,
            "Submissions: {} in {}",
            import.submissions.len(),
            path.display()
        )?;
        report.submission_count = Some(import.submissions.len());
        let file = path.display().to_string();
        report
            .skipped
            .extend(import.skipped.into_iter().map(|line| (file.clone(), line)));
    }
    if report.skipped.is_empty() {
        writeln!(out, "No skipped lines.")?;
    } else {
        writeln!(out, "{}", skipped_table(&report.skipped))?;
    }
    Ok(report)
}

fn skipped_table(skipped: &[(String, SkippedLine)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120)
        .set_header(
            ["File", "Line", "Content", "Reason"]
                .into_iter()
                .map(|label| {
                    Cell::new(label)
                        .fg(Color::Cyan)
                        .add_attribute(Attribute::Bold)
                })
                .collect::<Vec<_>>(),
        );
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (file, line) in skipped {
        table.add_row(vec![
            Cell::new(file),
            Cell::new(line.line_number),
            Cell::new(&line.content),
            Cell::new(&line.reason).fg(Color::Yellow),
        ]);
    }
    table
}
