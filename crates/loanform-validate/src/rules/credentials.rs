//! Login credential rules.

use std::sync::LazyLock;

use regex::Regex;

use loanform_model::FieldValue;

use super::{RuleEnv, text};
use crate::issue::Issue;

/// Dot-separated atoms before the `@`, then `domain.tld` with exactly one
/// `.label`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9\-#%*_+/?{}|`$&]+(\.[A-Za-z0-9\-#%*_+/?{}|`$&]+)*@[A-Za-z0-9]+(\.[A-Za-z0-9]+)$",
    )
    .expect("Invalid email regex")
});

static PIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("Invalid PIN regex"));

/// Lowercases the domain; the local part is kept as typed.
pub(super) fn email(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    let address = text(&value);
    if !EMAIL_REGEX.is_match(address) {
        return Err(Issue::InvalidFormat {
            expected: "an address like name@example.com",
        });
    }
    let normalized = match address.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_ascii_lowercase()),
        None => address.to_string(),
    };
    Ok(FieldValue::Text(normalized))
}

pub(super) fn pin_number(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    if !PIN_REGEX.is_match(text(&value)) {
        return Err(Issue::InvalidFormat {
            expected: "4 digits",
        });
    }
    Ok(value)
}
