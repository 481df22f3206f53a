use chrono::NaiveDate;

use loanform_derive::DerivedValues;
use loanform_model::ValidatedRecord;
use loanform_validate::ValidationReport;

/// Outcome of one command run over a single application.
#[derive(Debug)]
pub struct ApplicationResult<T> {
    /// Where the application was read from.
    pub source: String,
    /// Evaluation date used for age and year windows.
    pub today: NaiveDate,
    pub outcome: Result<T, ValidationReport>,
}

impl<T> ApplicationResult<T> {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug)]
pub struct DerivedApplication {
    pub record: ValidatedRecord,
    pub derived: DerivedValues,
}

pub type ValidationResult = ApplicationResult<ValidatedRecord>;
pub type DerivationResult = ApplicationResult<DerivedApplication>;
