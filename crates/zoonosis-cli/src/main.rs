//! Zoonosis surveillance CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use zoonosis_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use zoonosis_cli::logging::{LogConfig, LogFormat, init_logging};
use zoonosis_report::{ClientError, ReportError};

mod commands;

use crate::commands::{run_catalog, run_heatmap, run_load, run_report, run_seasonal, run_trend};

/// Exit status for a request that was rejected before running.
const EXIT_CLIENT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Load(args) => run_load(&cli.db, cli.format, args),
        Command::Trend(args) => run_trend(&cli.db, cli.format, args),
        Command::Heatmap(args) => run_heatmap(&cli.db, cli.format, args),
        Command::Seasonal(args) => run_seasonal(&cli.db, cli.format, args),
        Command::Report(args) => run_report(&cli.db, cli.format, args),
        Command::Catalog => run_catalog(&cli.db, cli.format),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            exit_code_for(&error)
        }
    };
    std::process::exit(exit_code);
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    let client = error.downcast_ref::<ClientError>().is_some()
        || matches!(error.downcast_ref::<ReportError>(), Some(ReportError::Client(_)));
    if client { EXIT_CLIENT_ERROR } else { 1 }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
