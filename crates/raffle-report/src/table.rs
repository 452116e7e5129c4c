use std::fmt::Write as _;

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use raffle_model::{Allocation, Prize, PrizeInsight};

use crate::ResultRenderer;

const NO_WINNER: &str = "No eligible winner";
const TIE_MARK: &str = "⚠";

const TABLE_WIDTH: u16 = 120;

/// Terminal tables built with `comfy-table`.
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    styled: bool,
}

impl TableRenderer {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    /// Renderer that never emits ANSI styling.
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn table(&self, header: &[&str]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(TABLE_WIDTH);
        if self.styled {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table.set_header(header.iter().copied().map(header_cell).collect::<Vec<_>>());
        table
    }
}

impl ResultRenderer for TableRenderer {
    fn render_prizes(&self, prizes: &[Prize]) -> Result<String> {
        let mut table = self.table(&["#", "Prize", "Number"]);
        align_column(&mut table, 0, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        for (index, prize) in prizes.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index + 1),
                prize_cell(&prize.name),
                Cell::new(prize.assigned_number),
            ]);
        }
        Ok(table.to_string())
    }

    fn render_results(&self, allocations: &[Allocation]) -> Result<String> {
        let mut table = self.table(&["#", "Prize", "Number", "Winner", "Guess", "Ties"]);
        align_column(&mut table, 0, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 4, CellAlignment::Right);
        for allocation in allocations {
            let (winner, guess) = match &allocation.winner {
                Some(winner) => (
                    Cell::new(&winner.submitter_name)
                        .fg(Color::Green)
                        .add_attribute(Attribute::Bold),
                    Cell::new(winner.guess),
                ),
                None => (dim_cell(NO_WINNER), dim_cell("-")),
            };
            table.add_row(vec![
                Cell::new(allocation.position),
                prize_cell(&allocation.prize.name),
                Cell::new(allocation.prize.assigned_number),
                winner,
                guess,
                ties_cell(&allocation.ties),
            ]);
        }
        Ok(table.to_string())
    }

    fn render_insights(&self, insights: &[PrizeInsight]) -> Result<String> {
        let mut out = String::new();
        for insight in insights {
            writeln!(
                out,
                "Prize: {} ({})",
                insight.prize.name, insight.prize.assigned_number
            )?;
            if insight.entries.is_empty() {
                writeln!(out, "  No eligible submissions")?;
                writeln!(out)?;
                continue;
            }
            let mut table = self.table(&["Rank", "Submitter", "Guess", "Distance", "Tie"]);
            align_column(&mut table, 0, CellAlignment::Right);
            align_column(&mut table, 2, CellAlignment::Right);
            align_column(&mut table, 3, CellAlignment::Right);
            align_column(&mut table, 4, CellAlignment::Center);
            for (index, entry) in insight.entries.iter().enumerate() {
                let tie = if entry.tied {
                    Cell::new(TIE_MARK).fg(Color::Yellow)
                } else {
                    dim_cell("")
                };
                table.add_row(vec![
                    Cell::new(index + 1),
                    Cell::new(&entry.record.submitter_name),
                    Cell::new(entry.record.guess),
                    Cell::new(entry.record.distance),
                    tie,
                ]);
            }
            writeln!(out, "{table}")?;
            writeln!(out)?;
        }
        Ok(out)
    }
}

fn ties_cell(ties: &[String]) -> Cell {
    if ties.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(format!("{TIE_MARK} {}", ties.join(", "))).fg(Color::Yellow)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn prize_cell(name: &str) -> Cell {
    Cell::new(name).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
