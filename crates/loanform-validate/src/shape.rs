//! Primitive shape check: kind, presence and length/range bounds.

use loanform_model::{FieldKind, FieldSpec, FieldValue, Presence, RawValue};

use crate::issue::Issue;

/// Check a raw value against its field's spec and convert it to a
/// [`FieldValue`] of the spec's kind.
///
/// Integer fields also accept a decimal string; surrounding whitespace is
/// ignored. Text values are kept verbatim.
pub fn check(spec: &FieldSpec, raw: Option<&RawValue>) -> Result<FieldValue, Issue> {
    match spec.kind {
        FieldKind::Text { min, max } => check_text(spec.presence, min, max, raw),
        FieldKind::Integer { min, max } => check_integer(min, max, raw),
    }
}

fn check_text(
    presence: Presence,
    min: usize,
    max: Option<usize>,
    raw: Option<&RawValue>,
) -> Result<FieldValue, Issue> {
    let text = match (raw, presence) {
        (Some(RawValue::Text(text)), _) => text.as_str(),
        (Some(RawValue::Integer(_)), _) => return Err(Issue::ExpectedText),
        (None, Presence::Required) => return Err(Issue::Required),
        (None, Presence::DefaultEmpty) => return Ok(FieldValue::Text(String::new())),
        (None, Presence::Optional) => "",
    };

    let actual = text.chars().count();
    if actual == 0 && min > 0 {
        return Err(Issue::Required);
    }
    if actual < min {
        return Err(Issue::TooShort { min, actual });
    }
    if let Some(max) = max
        && actual > max
    {
        return Err(Issue::TooLong { max, actual });
    }
    Ok(FieldValue::Text(text.to_string()))
}

fn check_integer(min: i64, max: i64, raw: Option<&RawValue>) -> Result<FieldValue, Issue> {
    let actual = match raw {
        None => return Err(Issue::Required),
        Some(RawValue::Integer(value)) => *value,
        Some(RawValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(Issue::Required);
            }
            trimmed.parse::<i64>().map_err(|_| Issue::ExpectedInteger)?
        }
    };
    if !(min..=max).contains(&actual) {
        return Err(Issue::OutOfRange { min, max, actual });
    }
    Ok(FieldValue::Integer(actual))
}
