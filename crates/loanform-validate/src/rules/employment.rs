//! Employment rules.

use chrono::Datelike;

use loanform_model::{CEO_KEY, CatalogKind, FieldName, FieldValue, ValidatedFields};

use super::{RuleEnv, prerequisite, prerequisite_number, text};
use crate::issue::Issue;
use crate::script::is_katakana;

/// The company-representative insurance code is valid exactly when the
/// employment type is the company-representative code.
///
/// Runs after the catalog rule, so `value` already holds the insurance code.
pub(super) fn insurance_matches_employment(
    env: &RuleEnv<'_>,
    value: FieldValue,
    context: &ValidatedFields,
) -> Result<FieldValue, Issue> {
    let employee_code = prerequisite(context, FieldName::EmployeeType)?;
    let ceo_employee = is_ceo_code(env, CatalogKind::EmployeeType, employee_code);
    let ceo_insurance = is_ceo_code(env, CatalogKind::InsuranceType, text(&value));
    if ceo_employee != ceo_insurance {
        return Err(Issue::InsuranceMismatch { ceo_employee });
    }
    Ok(value)
}

fn is_ceo_code(env: &RuleEnv<'_>, kind: CatalogKind, code: &str) -> bool {
    env.catalogs
        .get(kind)
        .is_some_and(|catalog| catalog.is_code_for(code, CEO_KEY))
}

/// Between the birth year and the current year, inclusive.
pub(super) fn hire_year_window(
    env: &RuleEnv<'_>,
    value: FieldValue,
    context: &ValidatedFields,
) -> Result<FieldValue, Issue> {
    let birth_year: i32 = prerequisite_number(context, FieldName::BirthdayYear)?;
    let current_year = env.today.year();
    let year: i32 = text(&value).parse().unwrap_or_default();
    if year < birth_year || year > current_year {
        return Err(Issue::YearOutOfRange {
            min: birth_year,
            max: current_year,
        });
    }
    Ok(value)
}

pub(super) fn kana_company_name(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    if !is_katakana(text(&value)) {
        return Err(Issue::NotKatakana);
    }
    Ok(value)
}
