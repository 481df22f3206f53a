//! Address rules. The free-text checks are shared with the employment
//! fields (other work, company name).

use std::sync::LazyLock;

use regex::Regex;

use loanform_model::{FieldName, FieldValue, ValidatedFields};

use super::identity::combined_length;
use super::{RuleEnv, prerequisite, text};
use crate::issue::Issue;
use crate::script::is_valid_chars;

static POSTAL_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7}$").expect("Invalid postal code regex"));
static ADDRESS_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{10}$").expect("Invalid address code regex"));
static JIS_ADDRESS_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("Invalid JIS address code regex"));

const STREET_MAX_COMBINED: usize = 32;

pub(super) fn postal_code(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    if !POSTAL_CODE_REGEX.is_match(text(&value)) {
        return Err(Issue::InvalidFormat {
            expected: "7 digits without a hyphen",
        });
    }
    Ok(value)
}

pub(super) fn valid_chars(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    if !is_valid_chars(text(&value)) {
        return Err(Issue::InvalidCharacters);
    }
    Ok(value)
}

pub(super) fn optional_valid_chars(
    env: &RuleEnv<'_>,
    value: FieldValue,
) -> Result<FieldValue, Issue> {
    if text(&value).is_empty() {
        return Ok(value);
    }
    valid_chars(env, value)
}

/// Building name; together with the block number at most 32 characters.
pub(super) fn street(
    _env: &RuleEnv<'_>,
    value: FieldValue,
    context: &ValidatedFields,
) -> Result<FieldValue, Issue> {
    let block = prerequisite(context, FieldName::BlockNumber)?;
    let street = text(&value);
    if street.is_empty() {
        return Ok(value);
    }
    if !is_valid_chars(street) {
        return Err(Issue::InvalidCharacters);
    }
    combined_length(block, street, FieldName::BlockNumber, STREET_MAX_COMBINED)?;
    Ok(value)
}

pub(super) fn address_code(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    let code = text(&value);
    if !code.is_empty() && !ADDRESS_CODE_REGEX.is_match(code) {
        return Err(Issue::InvalidFormat {
            expected: "10 letters or digits",
        });
    }
    Ok(value)
}

pub(super) fn jis_address_code(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    let code = text(&value);
    if !code.is_empty() && !JIS_ADDRESS_CODE_REGEX.is_match(code) {
        return Err(Issue::InvalidFormat {
            expected: "5 digits",
        });
    }
    Ok(value)
}
