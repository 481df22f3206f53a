//! CLI argument definitions for the loan application validator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "loanform",
    version,
    about = "Validate loan applications and compute derived values",
    long_about = "Validate loan application submissions field by field.\n\n\
                  Applications are read as JSON objects keyed by field name.\n\
                  Enum fields are checked against CSV catalogs; the embedded\n\
                  catalogs are used unless a catalog file is configured."
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

    /// Allow submitted field values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: ./loanform.toml when it exists).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Catalog CSV to load instead of the configured or embedded catalogs.
    #[arg(long = "catalogs", value_name = "PATH", global = true)]
    pub catalogs: Option<PathBuf>,

    /// Evaluate age and year windows as of this date (YYYY-MM-DD).
    #[arg(long = "today", value_name = "DATE", global = true)]
    pub today: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an application and print the normalized record or its issues.
    Validate(InputArgs),

    /// Validate an application and print the values derived from it.
    Derive(InputArgs),

    /// List the loaded enum catalogs.
    Catalogs,
}

#[derive(Parser)]
pub struct InputArgs {
    /// JSON file holding one application (`-` reads standard input).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
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
