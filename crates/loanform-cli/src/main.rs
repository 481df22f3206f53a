//! Loan application validator CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use loanform_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use loanform_cli::commands::{run_catalogs, run_derive, run_validate};
use loanform_cli::config::{RunOptions, load_settings};
use loanform_cli::logging::{LogConfig, LogFormat, init_logging};
use loanform_cli::summary::{Styling, print_catalogs, print_derivation, print_validation};

/// Exit code for a rejected application.
const EXIT_INVALID: i32 = 1;
/// Exit code for unreadable input, settings or catalogs.
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_ERROR);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            EXIT_ERROR
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let settings = load_settings(cli.config.as_deref())?;
    let options = RunOptions::resolve(&settings, cli.catalogs.as_deref(), cli.today)?;
    let styling = match cli.color.color {
        ColorChoice::Never => Styling::Plain,
        ColorChoice::Always | ColorChoice::Auto => Styling::Auto,
    };
    match &cli.command {
        Command::Validate(args) => {
            let result = run_validate(args, &options)?;
            print_validation(&result, args.format, styling);
            Ok(if result.is_valid() { 0 } else { EXIT_INVALID })
        }
        Command::Derive(args) => {
            let result = run_derive(args, &options)?;
            print_derivation(&result, args.format, styling);
            Ok(if result.is_valid() { 0 } else { EXIT_INVALID })
        }
        Command::Catalogs => {
            let catalogs = run_catalogs(&options)?;
            print_catalogs(&catalogs, styling);
            Ok(0)
        }
    }
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
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
