//! Field rule engine.
//!
//! Runs every field's checks in validation order, threading forward only the
//! values that passed. All failures are collected; the pass never stops at
//! the first one.

use tracing::{debug, info, info_span};

use loanform_model::{CatalogRegistry, ModelError, RawInput, ValidatedFields, ValidatedRecord};

use crate::clock::Clock;
use crate::device::DeviceClassifier;
use crate::issue::{FieldIssue, Issue, ValidationReport};
use crate::rules::{FIELD_CHECKS, RuleEnv};

/// Result of one validation pass.
pub type ValidationOutcome = Result<ValidatedRecord, ValidationReport>;

/// Validates loan applications against a set of catalogs.
///
/// Holds no state between calls; the clock is read once per pass.
pub struct ApplicationValidator<'a> {
    catalogs: &'a CatalogRegistry,
    classifier: &'a dyn DeviceClassifier,
    clock: &'a dyn Clock,
}

impl<'a> ApplicationValidator<'a> {
    /// Create a validator.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the nine catalogs is missing or empty.
    pub fn new(
        catalogs: &'a CatalogRegistry,
        classifier: &'a dyn DeviceClassifier,
        clock: &'a dyn Clock,
    ) -> Result<Self, ModelError> {
        catalogs.ensure_complete()?;
        Ok(Self {
            catalogs,
            classifier,
            clock,
        })
    }

    /// Validate and normalize one application.
    pub fn validate(&self, input: &RawInput) -> ValidationOutcome {
        let today = self.clock.today();
        let span = info_span!("validate_application", %today);
        let _guard = span.enter();

        let env = RuleEnv {
            catalogs: self.catalogs,
            classifier: self.classifier,
            today,
        };
        let mut context = ValidatedFields::new();
        let mut issues = Vec::new();

        for check in FIELD_CHECKS {
            match check.run(&env, input.get(check.field), &context) {
                Ok(value) => context.insert(check.field, value),
                Err(issue) => {
                    debug!(
                        field = %check.field,
                        category = %issue.category(),
                        "field rejected"
                    );
                    issues.push(FieldIssue {
                        field: check.field,
                        issue,
                    });
                }
            }
        }

        info!(
            field_count = FIELD_CHECKS.len(),
            issue_count = issues.len(),
            "application validated"
        );

        if !issues.is_empty() {
            return Err(ValidationReport::new(issues));
        }
        ValidatedRecord::from_fields(&context).map_err(|error| {
            ValidationReport::new(vec![FieldIssue {
                field: error.field,
                issue: Issue::Required,
            }])
        })
    }
}
