//! Phone number rules.

use std::sync::LazyLock;

use regex::Regex;

use loanform_model::{FieldName, FieldValue, ValidatedFields};

use super::{RuleEnv, is_digits, text};
use crate::issue::Issue;

static MOBILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[7-9]0[0-9]{8}$").expect("Invalid mobile regex"));
static IP_PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^050[0-9]{8}$").expect("Invalid IP phone regex"));
static LANDLINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid landline regex"));
static COMPANY_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[1-9]0").expect("Invalid company prefix regex"));
static COMPANY_ELEVEN_DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[1-9]0[0-9]{8}$").expect("Invalid company phone regex"));

/// Empty, or 11 digits starting with 070, 080 or 090.
pub(super) fn mobile_phone(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    let number = text(&value);
    if number.is_empty() {
        return Ok(value);
    }
    if !is_digits(number) {
        return Err(Issue::NotDigits);
    }
    if !MOBILE_REGEX.is_match(number) {
        return Err(Issue::InvalidFormat {
            expected: "11 digits starting with 070, 080 or 090",
        });
    }
    Ok(value)
}

/// At least one of mobile and home must be given.
///
/// When the mobile number failed, an empty home number is reported against
/// the mobile number instead of as a missing pair.
pub(super) fn home_phone(
    _env: &RuleEnv<'_>,
    value: FieldValue,
    context: &ValidatedFields,
) -> Result<FieldValue, Issue> {
    let home = text(&value);
    match context.text(FieldName::MobilePhoneNumber) {
        None if home.is_empty() => Err(Issue::MobileInvalid),
        Some("") if home.is_empty() => Err(Issue::PhoneRequired),
        _ if home.is_empty() => Ok(value),
        _ => {
            check_home_format(home)?;
            Ok(value)
        }
    }
}

fn check_home_format(number: &str) -> Result<(), Issue> {
    if !is_digits(number) {
        return Err(Issue::NotDigits);
    }
    if number.starts_with("050") {
        if !IP_PHONE_REGEX.is_match(number) {
            return Err(Issue::InvalidFormat {
                expected: "11 digits when starting with 050",
            });
        }
    } else if !LANDLINE_REGEX.is_match(number) {
        return Err(Issue::InvalidFormat {
            expected: "10 digits",
        });
    }
    Ok(())
}

/// 11 digits with a 0[1-9]0 prefix, otherwise exactly 10.
pub(super) fn company_phone(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    let number = text(&value);
    if !is_digits(number) {
        return Err(Issue::NotDigits);
    }
    if COMPANY_PREFIX_REGEX.is_match(number) {
        if !COMPANY_ELEVEN_DIGIT_REGEX.is_match(number) {
            return Err(Issue::InvalidFormat {
                expected: "11 digits when starting with 0X0",
            });
        }
    } else if !LANDLINE_REGEX.is_match(number) {
        return Err(Issue::InvalidFormat {
            expected: "10 digits",
        });
    }
    Ok(value)
}
