use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::ColorChoice;
use colorchoice_clap::Color;

use raffle_cli::check::{CheckReport, run_check};
use raffle_cli::draw::{DrawRequest, InsightChoice, ReportFormat, run_draw};
use raffle_cli::session::Session;
use raffle_core::RaffleOutcome;
use raffle_model::RaffleOptions;

use crate::cli::{CheckArgs, DrawArgs, OutputFormatArg};

pub fn run_draw_command(args: &DrawArgs, color: &Color) -> Result<RaffleOutcome> {
    let request = draw_request(args, color);
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock());
    run_draw(&request, &mut session)
}

pub fn run_check_command(args: &CheckArgs) -> Result<CheckReport> {
    let mut out = io::stdout().lock();
    run_check(
        args.prizes.as_deref(),
        args.entries.as_deref(),
        RaffleOptions::default().range,
        &mut out,
    )
}

fn draw_request(args: &DrawArgs, color: &Color) -> DrawRequest {
    let insights = if args.insights {
        InsightChoice::Show
    } else if args.no_insights {
        InsightChoice::Skip
    } else {
        InsightChoice::Ask
    };
    let format = match args.format {
        OutputFormatArg::Table => ReportFormat::Table {
            styled: styled_output(color),
        },
        OutputFormatArg::Json => ReportFormat::Json,
        OutputFormatArg::Csv => ReportFormat::Csv,
    };
    DrawRequest {
        prizes: args.prizes.clone(),
        entries: args.entries.clone(),
        insights,
        options: RaffleOptions::default()
            .with_top_n(usize::try_from(args.top).unwrap_or(usize::MAX)),
        seed: args.seed,
        format,
    }
}

fn styled_output(color: &Color) -> bool {
    match color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    }
}
