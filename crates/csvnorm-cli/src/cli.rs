//! CLI argument definitions for the CSV normalizer.

use std::path::PathBuf;

use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvnorm",
    version,
    about = "Normalize delimited tabular data column by column",
    long_about = "Read a CSV stream, apply per-column normalization rules \
                  (timestamps, zip codes, names, durations, a derived total \
                  duration), and write the normalized CSV.\n\n\
                  Rows that fail to normalize are dropped and reported on \
                  stderr; the run continues with the next row."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Normalize a CSV stream (stdin to stdout by default).
    Normalize(NormalizeArgs),

    /// List the recognized columns and their normalization rules.
    Columns,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Input CSV file ("-" or omitted reads stdin).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output CSV file (omitted writes stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// IANA zone the input timestamps are interpreted in.
    #[arg(
        long = "source-zone",
        value_name = "ZONE",
        default_value = "America/Los_Angeles"
    )]
    pub source_zone: Tz,

    /// IANA zone the output timestamps are rendered in.
    ///
    /// The default is the fixed-offset EST zone, which matches the
    /// reference behavior; use America/New_York for DST-aware Eastern
    /// time.
    #[arg(long = "target-zone", value_name = "ZONE", default_value = "EST")]
    pub target_zone: Tz,

    /// Pass FullName values through without case folding.
    #[arg(long = "no-fold-names")]
    pub no_fold_names: bool,

    /// Skip the run summary table printed to stderr.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
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
