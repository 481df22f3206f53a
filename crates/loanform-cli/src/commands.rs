use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace, warn};

use loanform_derive::derive;
use loanform_model::{CatalogRegistry, FieldName, RawInput};
use loanform_standards::load_catalogs_from;
use loanform_validate::{
    ApplicationValidator, Clock, FixedClock, SystemClock, UserAgentClassifier,
};

use crate::cli::InputArgs;
use crate::config::RunOptions;
use crate::logging::redact_value;
use crate::types::{DerivationResult, DerivedApplication, ValidationResult};

/// Input path that reads the application from standard input.
pub const STDIN_PATH: &str = "-";

pub fn run_catalogs(options: &RunOptions) -> Result<CatalogRegistry> {
    load_catalogs_from(&options.catalogs)
        .with_context(|| format!("load catalogs from {}", options.catalogs.describe()))
}

pub fn run_validate(args: &InputArgs, options: &RunOptions) -> Result<ValidationResult> {
    let catalogs = run_catalogs(options)?;
    validate_file(&args.input, &catalogs, options)
}

pub fn run_derive(args: &InputArgs, options: &RunOptions) -> Result<DerivationResult> {
    let catalogs = run_catalogs(options)?;
    let validated = validate_file(&args.input, &catalogs, options)?;
    let outcome = validated.outcome.map(|record| {
        let derived = derive(&record, &catalogs);
        DerivedApplication { record, derived }
    });
    Ok(DerivationResult {
        source: validated.source,
        today: validated.today,
        outcome,
    })
}

fn validate_file(
    path: &Path,
    catalogs: &CatalogRegistry,
    options: &RunOptions,
) -> Result<ValidationResult> {
    let source = describe_input(path);
    let span = info_span!("application", source = %source);
    let _guard = span.enter();

    let input = read_input(path)?;
    log_input(&input);

    let classifier = UserAgentClassifier::new();
    let today = options.today.unwrap_or_else(|| SystemClock.today());
    let clock = FixedClock(today);
    let validator = ApplicationValidator::new(catalogs, &classifier, &clock)
        .context("catalogs are incomplete")?;
    let outcome = validator.validate(&input);
    match &outcome {
        Ok(_) => info!("application accepted"),
        Err(report) => warn!(issue_count = report.len(), "application rejected"),
    }
    Ok(ValidationResult {
        source,
        today,
        outcome,
    })
}

/// Read one application as a JSON object keyed by field name.
pub fn read_input(path: &Path) -> Result<RawInput> {
    let content = if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("read application from stdin")?;
        content
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("read application {}", path.display()))?
    };
    serde_json::from_str(&content)
        .with_context(|| format!("parse application {}", describe_input(path)))
}

fn describe_input(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn log_input(input: &RawInput) {
    info!(key_count = input.len(), "application read");
    for field in FieldName::ALL {
        if let Some(value) = input.get(field) {
            let value = value.to_string();
            trace!(field = %field, value = redact_value(&value), "submitted value");
        }
    }
}
