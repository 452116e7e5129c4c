//! RaffleTool CLI.

use clap::{ColorChoice, Parser};
use raffle_cli::logging::{LogConfig, LogFormat, init_logging};
use raffle_report::summary_line;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use tracing::info;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_check_command, run_draw_command};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Draw(args) => match run_draw_command(args, &cli.color) {
            Ok(outcome) => {
                info!(summary = %summary_line(&outcome.allocations), "draw finished");
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Check(args) => match run_check_command(args) {
            Ok(report) => {
                if report.has_problems() { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_ansi(with_ansi)
        .with_timestamps(cli.log_timestamps);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_shape_log_config() {
        let cli = Cli::parse_from([
            "raffle",
            "--log-level",
            "debug",
            "--log-format",
            "compact",
            "--log-timestamps",
            "--color",
            "never",
            "check",
        ]);
        let config = log_config_from_cli(&cli);

        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.with_timestamps);
        assert!(!config.with_ansi);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn defaults_defer_to_rust_log() {
        let cli = Cli::parse_from(["raffle", "check"]);
        let config = log_config_from_cli(&cli);

        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(!config.with_timestamps);
        assert!(config.use_env_filter);
    }
}
