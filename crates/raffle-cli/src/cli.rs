//! CLI argument definitions for the raffle tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use raffle_model::DEFAULT_TOP_N;

#[derive(Parser)]
#[command(
    name = "raffle",
    version,
    about = "RaffleTool - closest-number raffle, one prize per player",
    long_about = "Draw a unique random number (1-100) for every prize, then award each prize\n\
                  to the submission whose guess is closest. Nobody wins more than one prize.\n\n\
                  Prizes and submissions can be typed in or imported from .txt files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a raffle: collect prizes and submissions, draw, and show winners.
    Draw(DrawArgs),

    /// Parse prize and submission files and report problems without drawing.
    Check(CheckArgs),
}

#[derive(Args)]
pub struct DrawArgs {
    /// Prize list file, one prize per line (asked interactively when omitted).
    #[arg(long = "prizes", value_name = "FILE")]
    pub prizes: Option<PathBuf>,

    /// Submission file, one `name, number` per line (asked interactively when omitted).
    #[arg(long = "entries", value_name = "FILE")]
    pub entries: Option<PathBuf>,

    /// Show per-prize insights without asking.
    #[arg(long = "insights", conflicts_with = "no_insights")]
    pub insights: bool,

    /// Skip per-prize insights without asking.
    #[arg(long = "no-insights")]
    pub no_insights: bool,

    /// Number of closest submissions listed per prize in insights.
    #[arg(
        long = "top",
        value_name = "N",
        default_value_t = DEFAULT_TOP_N as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub top: u64,

    /// Seed for a reproducible draw.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Prize list file to check.
    #[arg(long = "prizes", value_name = "FILE")]
    pub prizes: Option<PathBuf>,

    /// Submission file to check.
    #[arg(long = "entries", value_name = "FILE")]
    pub entries: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Csv,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
