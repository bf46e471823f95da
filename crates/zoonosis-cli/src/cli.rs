//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use zoonosis_load::{DEFAULT_BATCH_SIZE, DEFAULT_ERROR_LOG_LIMIT};
use zoonosis_report::RegionScope;

#[derive(Parser)]
#[command(
    name = "zoonosis",
    version,
    about = "Zoonosis surveillance - load notification files and report on cases",
    long_about = "Load national zoonosis notification files into a SQLite case store\n\
                  and summarize cases by year, region and month."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Case database file (created when missing).
    #[arg(long = "db", value_name = "PATH", default_value = "zoonosis.db", global = true)]
    pub db: PathBuf,

    /// Result output format.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a notification CSV file into the case database.
    Load(LoadArgs),

    /// Cases per year for one disease.
    Trend(TrendArgs),

    /// Cases per region for one disease and year.
    Heatmap(HeatmapArgs),

    /// Cases per month for one or more diseases.
    Seasonal(SeasonalArgs),

    /// Compare one disease across several regions.
    Report(ReportArgs),

    /// List diseases, regions and years present in the database.
    Catalog,
}

#[derive(Args)]
pub struct LoadArgs {
    /// Notification file (CSV with a header row).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Rows committed per transaction.
    #[arg(long = "batch-size", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Row errors logged individually before the rest are only counted.
    #[arg(long = "error-log-limit", default_value_t = DEFAULT_ERROR_LOG_LIMIT)]
    pub error_log_limit: usize,
}

// Report parameters are optional at the argument level so a missing one is
// reported the same way for every report.

#[derive(Args)]
pub struct TrendArgs {
    /// Disease type id (see `catalog`).
    #[arg(long = "disease", value_name = "ID")]
    pub disease: Option<i64>,

    /// First year, inclusive.
    #[arg(long = "from", value_name = "YEAR")]
    pub from: Option<i32>,

    /// Last year, inclusive.
    #[arg(long = "to", value_name = "YEAR")]
    pub to: Option<i32>,
}

#[derive(Args)]
pub struct HeatmapArgs {
    #[arg(long = "disease", value_name = "ID")]
    pub disease: Option<i64>,

    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<i32>,
}

#[derive(Args)]
pub struct SeasonalArgs {
    /// Disease type ids; repeat or separate with commas.
    #[arg(long = "disease", value_name = "ID", value_delimiter = ',')]
    pub diseases: Vec<i64>,

    #[arg(long = "from", value_name = "YEAR")]
    pub from: Option<i32>,

    #[arg(long = "to", value_name = "YEAR")]
    pub to: Option<i32>,

    /// Region id, or `national` for the whole country.
    #[arg(long = "region", value_name = "ID|national")]
    pub region: Option<RegionScope>,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Region ids; repeat or separate with commas.
    #[arg(long = "region", value_name = "ID", value_delimiter = ',')]
    pub regions: Vec<i64>,

    #[arg(long = "disease", value_name = "ID")]
    pub disease: Option<i64>,

    #[arg(long = "from", value_name = "YEAR")]
    pub from: Option<i32>,

    #[arg(long = "to", value_name = "YEAR")]
    pub to: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
