//! Housing rules.

use chrono::Datelike;

use loanform_model::{FieldName, FieldValue, ValidatedFields};

use super::{RuleEnv, prerequisite_number, text};
use crate::issue::Issue;

pub(super) fn move_in_year_window(
    env: &RuleEnv<'_>,
    value: FieldValue,
    context: &ValidatedFields,
) -> Result<FieldValue, Issue> {
    let birth_year: i32 = prerequisite_number(context, FieldName::BirthdayYear)?;
    let current_year = env.today.year();
    let year: i32 = text(&value).parse().unwrap_or_default();
    if year < birth_year {
        return Err(Issue::BeforeBirthYear { birth_year });
    }
    if year > current_year {
        return Err(Issue::InFuture { current_year });
    }
    Ok(value)
}
