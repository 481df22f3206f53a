//! Device and applicant name rules.

use loanform_model::{FieldName, FieldValue, ValidatedFields};

use super::{RuleEnv, prerequisite, text};
use crate::device::DeviceClass;
use crate::issue::Issue;
use crate::script::{is_full_width, is_katakana};

const NAME_MAX_COMBINED: usize = 19;
const KANA_NAME_MAX_COMBINED: usize = 29;

/// Stores the device family in place of the raw user agent.
pub(super) fn user_agent(env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    match env.classifier.classify(text(&value)) {
        DeviceClass::Family(family) => Ok(FieldValue::Text(family)),
        DeviceClass::Unclassified => Err(Issue::UnclassifiedDevice),
    }
}

pub(super) fn last_name(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    if !is_full_width(text(&value)) {
        return Err(Issue::NotFullWidth);
    }
    Ok(value)
}

pub(super) fn first_name(
    _env: &RuleEnv<'_>,
    value: FieldValue,
    context: &ValidatedFields,
) -> Result<FieldValue, Issue> {
    let last = prerequisite(context, FieldName::LastName)?;
    let first = text(&value);
    if !is_full_width(first) {
        return Err(Issue::NotFullWidth);
    }
    combined_length(last, first, FieldName::LastName, NAME_MAX_COMBINED)?;
    Ok(value)
}

pub(super) fn kana_last_name(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    if !is_katakana(text(&value)) {
        return Err(Issue::NotKatakana);
    }
    Ok(value)
}

pub(super) fn kana_first_name(
    _env: &RuleEnv<'_>,
    value: FieldValue,
    context: &ValidatedFields,
) -> Result<FieldValue, Issue> {
    let last = prerequisite(context, FieldName::KanaLastName)?;
    let first = text(&value);
    if !is_katakana(first) {
        return Err(Issue::NotKatakana);
    }
    combined_length(last, first, FieldName::KanaLastName, KANA_NAME_MAX_COMBINED)?;
    Ok(value)
}

/// Character count of two fields together.
pub(super) fn combined_length(
    other: &str,
    own: &str,
    other_field: FieldName,
    max: usize,
) -> Result<(), Issue> {
    let actual = other.chars().count() + own.chars().count();
    if actual > max {
        return Err(Issue::CombinedTooLong {
            other: other_field,
            max,
            actual,
        });
    }
    Ok(())
}
