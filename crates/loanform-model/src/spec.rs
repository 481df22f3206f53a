//! Static shape constraints per field.
//!
//! A [`FieldSpec`] only describes the primitive kind and length/range bounds.
//! Character-class rules, catalogs and cross-field rules live in the
//! validation engine.

use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// Primitive kind with its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Text; lengths count Unicode scalar values. `max: None` is unbounded.
    Text { min: usize, max: Option<usize> },
    /// Integer with an inclusive range.
    Integer { min: i64, max: i64 },
}

/// What to assume when a field is absent from the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Absent is a shape violation.
    Required,
    /// Absent is read as the empty string and the length bounds are skipped.
    DefaultEmpty,
    /// Absent is read as the empty string and the length bounds still apply.
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub field: FieldName,
    pub kind: FieldKind,
    pub presence: Presence,
}

impl FieldSpec {
    const fn text(field: FieldName, min: usize, max: usize) -> Self {
        Self {
            field,
            kind: FieldKind::Text {
                min,
                max: Some(max),
            },
            presence: if min == 0 {
                Presence::Optional
            } else {
                Presence::Required
            },
        }
    }

    const fn unbounded_text(field: FieldName, min: usize) -> Self {
        Self {
            field,
            kind: FieldKind::Text { min, max: None },
            presence: Presence::Required,
        }
    }

    const fn integer(field: FieldName, min: i64, max: i64) -> Self {
        Self {
            field,
            kind: FieldKind::Integer { min, max },
            presence: Presence::Required,
        }
    }

    /// Returns the spec for a field.
    pub const fn of(field: FieldName) -> Self {
        match field {
            FieldName::UserAgent => Self::unbounded_text(field, 0),
            FieldName::LastName | FieldName::FirstName => Self::text(field, 1, 18),
            FieldName::KanaLastName | FieldName::KanaFirstName => Self::text(field, 1, 28),
            FieldName::BirthdayYear => Self::text(field, 4, 4),
            FieldName::BirthdayMonth => Self::text(field, 2, 2),
            FieldName::BirthdayDay => Self::text(field, 1, 2),
            FieldName::MobilePhoneNumber | FieldName::HomePhoneNumber => {
                Self::text(field, 0, 11)
            }
            FieldName::PreferredContact => Self {
                field,
                kind: FieldKind::Text { min: 1, max: None },
                presence: Presence::DefaultEmpty,
            },
            FieldName::YearlySalary => Self::integer(field, 0, 9_999_999),
            FieldName::DesiredAmount => Self::integer(field, 1, 400),
            FieldName::VisitUrl => Self::text(field, 0, 2000),
            FieldName::Gender
            | FieldName::Purpose
            | FieldName::Marriage
            | FieldName::EmployeeType
            | FieldName::InsuranceType
            | FieldName::BusinessType
            | FieldName::CompanySize
            | FieldName::HousingType
            | FieldName::LivingAlone => Self::unbounded_text(field, 1),
            FieldName::PostalCode => Self::text(field, 7, 7),
            FieldName::Address => Self::text(field, 0, 32),
            FieldName::BlockNumber => Self::text(field, 1, 32),
            FieldName::Street => Self::text(field, 0, 31),
            FieldName::AddressCode => Self::text(field, 0, 10),
            FieldName::JisAddressCode => Self::text(field, 0, 5),
            FieldName::PayDay => Self::integer(field, 1, 31),
            FieldName::HireDateYear | FieldName::MoveInYear => Self::text(field, 4, 4),
            FieldName::OtherWork => Self::text(field, 0, 20),
            FieldName::CompanyName => Self::text(field, 1, 20),
            FieldName::KanaCompanyName => Self::text(field, 1, 30),
            FieldName::CompanyPhoneNumber => Self::text(field, 10, 11),
            FieldName::Rent => Self::integer(field, 0, 999_999_999),
            FieldName::DependentFamily => Self::integer(field, 0, 20),
            FieldName::Email => Self::text(field, 7, 50),
            FieldName::PinNumber => Self::text(field, 4, 4),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.kind, FieldKind::Integer { .. })
    }
}
