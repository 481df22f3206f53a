//! Birth date rules and the four-digit year check shared with the
//! hire and move-in years.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use loanform_model::{FieldName, FieldValue, ValidatedFields};

use super::{RuleEnv, is_digits, prerequisite_number, text};
use crate::issue::Issue;

static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("Invalid year regex"));

const MIN_AGE: i32 = 20;
const MAX_AGE: i32 = 69;

pub(super) fn four_digit_year(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    if !YEAR_REGEX.is_match(text(&value)) {
        return Err(Issue::InvalidFormat {
            expected: "a 4-digit year",
        });
    }
    Ok(value)
}

pub(super) fn month(_env: &RuleEnv<'_>, value: FieldValue) -> Result<FieldValue, Issue> {
    parse_component(text(&value), 1, 12)?;
    Ok(value)
}

/// Day in 1..=31, then the applicant's age on today's date.
pub(super) fn day_and_age(
    env: &RuleEnv<'_>,
    value: FieldValue,
    context: &ValidatedFields,
) -> Result<FieldValue, Issue> {
    let year: i32 = prerequisite_number(context, FieldName::BirthdayYear)?;
    let month: u32 = prerequisite_number(context, FieldName::BirthdayMonth)?;
    let day = parse_component(text(&value), 1, 31)?;

    let age = age_on(year, month, day, env.today);
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(Issue::AgeOutOfRange {
            age,
            min: MIN_AGE,
            max: MAX_AGE,
        });
    }
    Ok(value)
}

pub(super) fn calendar_date(
    _env: &RuleEnv<'_>,
    value: FieldValue,
    context: &ValidatedFields,
) -> Result<FieldValue, Issue> {
    let year: i32 = prerequisite_number(context, FieldName::BirthdayYear)?;
    let month: u32 = prerequisite_number(context, FieldName::BirthdayMonth)?;
    let day = parse_component(text(&value), 1, 31)?;
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(Issue::InvalidDate { year, month, day });
    }
    Ok(value)
}

/// Completed years between a birth date and `today`.
///
/// The birth date need not be a real calendar date; only the month/day
/// ordering against `today` matters.
pub(crate) fn age_on(year: i32, month: u32, day: u32, today: NaiveDate) -> i32 {
    let had_birthday = (today.month(), today.day()) >= (month, day);
    today.year() - year - i32::from(!had_birthday)
}

fn parse_component(value: &str, min: u32, max: u32) -> Result<u32, Issue> {
    Some(value)
        .filter(|value| is_digits(value))
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|number| (min..=max).contains(number))
        .ok_or_else(|| Issue::DateComponentOutOfRange {
            min,
            max,
            value: value.to_string(),
        })
}
