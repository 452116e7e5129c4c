//! The `draw` pipeline: collect prizes, draw numbers, collect submissions,
//! allocate, and report.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info_span};

use raffle_core::{Raffle, RaffleOutcome};
use raffle_ingest::{FilePrizeSource, FileSubmissionSource, PrizeSource, SubmissionSource};
use raffle_model::RaffleOptions;
use raffle_report::{CsvRenderer, JsonRenderer, ResultRenderer, TableRenderer, summary_line};

use crate::session::Session;

const BANNER: &str = r"
 ____        __  __ _     _____           _
|  _ \ __ _ / _|/ _| | __|_   _|__   ___ | |
| |_) / _` | |_| |_| |/ _ \| |/ _ \ / _ \| |
|  _ < (_| |  _|  _| |  __/| | (_) | (_) | |
|_| \_\__,_|_| |_| |_|\___||_|\___/ \___/|_|
";

/// Whether to show per-prize insights after the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsightChoice {
    /// Ask interactively (table output only; other formats skip).
    #[default]
    Ask,
    Show,
    Skip,
}

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table { styled: bool },
    Json,
    Csv,
}

impl ReportFormat {
    fn is_interactive(self) -> bool {
        matches!(self, Self::Table { .. })
    }

    fn renderer(self) -> Box<dyn ResultRenderer> {
        match self {
            Self::Table { styled } => Box::new(TableRenderer::new(styled)),
            Self::Json => Box::new(JsonRenderer),
            Self::Csv => Box::new(CsvRenderer),
        }
    }
}

/// Everything a `draw` run needs besides its input/output streams.
#[derive(Debug, Clone)]
pub struct DrawRequest {
    pub prizes: Option<PathBuf>,
    pub entries: Option<PathBuf>,
    pub insights: InsightChoice,
    pub options: RaffleOptions,
    pub seed: Option<u64>,
    pub format: ReportFormat,
}

impl Default for DrawRequest {
    fn default() -> Self {
        Self {
            prizes: None,
            entries: None,
            insights: InsightChoice::default(),
            options: RaffleOptions::default(),
            seed: None,
            format: ReportFormat::Table { styled: false },
        }
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "using seeded draw");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Runs a complete raffle through `session`.
///
/// # Errors
///
/// Fails when input cannot be collected, when there are no prizes or more
/// prizes than numbers, or when output cannot be written.
pub fn run_draw<R: BufRead, W: Write>(
    request: &DrawRequest,
    session: &mut Session<R, W>,
) -> Result<RaffleOutcome> {
    let span = info_span!("draw");
    let _guard = span.enter();
    if request.format.is_interactive() {
        run_interactive(request, session)
    } else {
        run_batch(request, session)
    }
}

fn run_interactive<R: BufRead, W: Write>(
    request: &DrawRequest,
    session: &mut Session<R, W>,
) -> Result<RaffleOutcome> {
    let raffle = Raffle::new(request.options);
    let renderer = request.format.renderer();
    let mut rng = rng_for(request.seed);

    session.say(BANNER)?;
    session.say("Welcome to RaffleTool! Please enter the prizes for the raffle.")?;
    let names = session.collect_prizes(request.prizes.as_deref())?;
    let prizes = raffle.draw(&names, &mut rng)?;

    session.say("\nPrizes with assigned random numbers:\n")?;
    session.say(renderer.render_prizes(&prizes)?)?;
    session.say("\nNow enter submissions with your names and numbers...\n")?;
    let submissions = session.collect_submissions(request.entries.as_deref())?;
    let outcome = raffle.allocate(prizes, &submissions);

    session.say("\n=== RAFFLE RESULTS ===\n")?;
    session.say(renderer.render_results(&outcome.allocations)?)?;
    session.say(summary_line(&outcome.allocations))?;

    let show_insights = match request.insights {
        InsightChoice::Show => true,
        InsightChoice::Skip => false,
        InsightChoice::Ask => session.confirm("\nShow more insights?")?,
    };
    if show_insights {
        session.say("\n=== INSIGHTS ===\n")?;
        session.say(renderer.render_insights(&raffle.insights(&outcome))?)?;
    }
    Ok(outcome)
}

fn run_batch<R: BufRead, W: Write>(
    request: &DrawRequest,
    session: &mut Session<R, W>,
) -> Result<RaffleOutcome> {
    let (Some(prize_file), Some(entry_file)) = (&request.prizes, &request.entries) else {
        bail!("json and csv output need both --prizes and --entries");
    };
    let raffle = Raffle::new(request.options);
    let renderer = request.format.renderer();
    let mut rng = rng_for(request.seed);

    let names = FilePrizeSource::new(prize_file).prize_names()?;
    let submissions = FileSubmissionSource::new(entry_file).submissions()?;

    let outcome = raffle.run(&names, &submissions, &mut rng)?;
    let insights = (request.insights == InsightChoice::Show).then(|| raffle.insights(&outcome));
    let report =
        renderer.render_report(&outcome.prizes, &outcome.allocations, insights.as_deref())?;
    session.say(report.trim_end())?;
    Ok(outcome)
}
