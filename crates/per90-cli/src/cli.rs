//! CLI argument definitions for the per-90 normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "per90",
    version,
    about = "Per-90 normalizer - Convert player stat totals to rates per 90 minutes",
    long_about = "Convert cumulative player statistics to per-90-minute rates.\n\n\
                  Every numeric column outside the identifier set is divided by \
                  minutes played and scaled to 90 minutes, the originals are \
                  dropped, gaps are filled with 0 and the market value column \
                  is moved last."
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

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a player statistics CSV and write the per-90 table.
    Run(RunArgs),

    /// Print the default schema as JSON (a starting point for --schema).
    Schema,
}

#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Path to the input CSV file (header row required).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: <INPUT stem>_per90.csv beside the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON schema file naming identifier, denominator and target columns.
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Denominator column (minutes played).
    #[arg(long = "denominator", value_name = "COLUMN")]
    pub denominator: Option<String>,

    /// Target column moved to the last position.
    #[arg(long = "target", value_name = "COLUMN", conflicts_with = "no_target")]
    pub target: Option<String>,

    /// Do not move any column to the end.
    #[arg(long = "no-target")]
    pub no_target: bool,

    /// Additional identifier column excluded from normalization (repeatable).
    #[arg(long = "identifier", value_name = "COLUMN")]
    pub identifiers: Vec<String>,

    /// Pass the dataset through with a warning when there is nothing to normalize.
    ///
    /// By default an input without any numeric stat column is rejected.
    #[arg(long = "allow-no-stats")]
    pub allow_no_stats: bool,

    /// Run and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number of output rows to preview (0 disables the preview).
    #[arg(long = "preview", value_name = "ROWS", default_value_t = 5)]
    pub preview: usize,
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
