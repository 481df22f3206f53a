//! Validation issue types.
//!
//! The Issue enum provides type-safe issue creation where each variant
//! carries only its needed data. Messages are rendered against the field the
//! issue was recorded for, so the same variant reads naturally on any field.

use std::fmt;

use serde::Serialize;

use loanform_model::{CatalogKind, FieldName};

/// Issue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Kind, presence, length, range or format outside the field's shape
    Shape,
    /// Wrong character class for a script-restricted field
    Script,
    /// A rule spanning several fields failed, or its prerequisite is missing
    CrossField,
    /// Key not found in the field's catalog
    Enum,
    /// User agent could not be classified
    Classification,
    /// Not a real date, or an age/year outside its window
    Date,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Shape,
            Self::Script,
            Self::CrossField,
            Self::Enum,
            Self::Classification,
            Self::Date,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shape => "Shape",
            Self::Script => "Script",
            Self::CrossField => "Cross-field",
            Self::Enum => "Enum",
            Self::Classification => "Classification",
            Self::Date => "Date",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    // Shape checks
    /// Value is absent or empty
    Required,
    /// Text field received a number
    ExpectedText,
    /// Integer field received something that is not an integer
    ExpectedInteger,
    TooShort {
        min: usize,
        actual: usize,
    },
    TooLong {
        max: usize,
        actual: usize,
    },
    OutOfRange {
        min: i64,
        max: i64,
        actual: i64,
    },
    NotDigits,
    /// Value does not match the field's pattern; `expected` describes it
    InvalidFormat {
        expected: &'static str,
    },

    // Script checks
    NotFullWidth,
    NotKatakana,
    InvalidCharacters,

    // Cross-field checks
    /// A field this rule reads failed earlier in the pass
    PrerequisiteMissing {
        prerequisite: FieldName,
    },
    CombinedTooLong {
        other: FieldName,
        max: usize,
        actual: usize,
    },
    /// Neither a mobile nor a home phone number was given
    PhoneRequired,
    /// Home phone number is empty and the mobile number failed
    MobileInvalid,
    /// Insurance type and employment type disagree on the company
    /// representative (CEO) code
    InsuranceMismatch {
        ceo_employee: bool,
    },

    // Catalog checks
    NotInCatalog {
        catalog: CatalogKind,
        key: String,
    },

    // Classification checks
    UnclassifiedDevice,

    // Date checks
    DateComponentOutOfRange {
        min: u32,
        max: u32,
        value: String,
    },
    AgeOutOfRange {
        age: i32,
        min: i32,
        max: i32,
    },
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
    },
    YearOutOfRange {
        min: i32,
        max: i32,
    },
    BeforeBirthYear {
        birth_year: i32,
    },
    InFuture {
        current_year: i32,
    },
}

impl Issue {
    /// Category for this issue type.
    pub fn category(&self) -> Category {
        match self {
            Issue::Required
            | Issue::ExpectedText
            | Issue::ExpectedInteger
            | Issue::TooShort { .. }
            | Issue::TooLong { .. }
            | Issue::OutOfRange { .. }
            | Issue::NotDigits
            | Issue::InvalidFormat { .. } => Category::Shape,
            Issue::NotFullWidth | Issue::NotKatakana | Issue::InvalidCharacters => {
                Category::Script
            }
            Issue::PrerequisiteMissing { .. }
            | Issue::CombinedTooLong { .. }
            | Issue::PhoneRequired
            | Issue::MobileInvalid
            | Issue::InsuranceMismatch { .. } => Category::CrossField,
            Issue::NotInCatalog { .. } => Category::Enum,
            Issue::UnclassifiedDevice => Category::Classification,
            Issue::DateComponentOutOfRange { .. }
            | Issue::AgeOutOfRange { .. }
            | Issue::InvalidDate { .. }
            | Issue::YearOutOfRange { .. }
            | Issue::BeforeBirthYear { .. }
            | Issue::InFuture { .. } => Category::Date,
        }
    }

    /// Format the message for the field this issue was recorded on.
    pub fn message(&self, field: FieldName) -> String {
        let label = field.label();
        match self {
            Issue::Required => format!("{label} is required"),
            Issue::ExpectedText => format!("{label} must be text, not a number"),
            Issue::ExpectedInteger => format!("{label} must be a whole number"),
            Issue::TooShort { min, actual } => {
                format!("{label} must be at least {min} characters (got {actual})")
            }
            Issue::TooLong { max, actual } => {
                format!("{label} must be at most {max} characters (got {actual})")
            }
            Issue::OutOfRange { min, max, actual } => {
                format!("{label} must be between {min} and {max} (got {actual})")
            }
            Issue::NotDigits => format!("{label} must contain digits only"),
            Issue::InvalidFormat { expected } => format!("{label} must be {expected}"),

            Issue::NotFullWidth => {
                format!("{label} must be written in full-width hiragana, katakana or kanji")
            }
            Issue::NotKatakana => format!("{label} must be written in full-width katakana"),
            Issue::InvalidCharacters => format!("{label} contains characters that cannot be used"),

            Issue::PrerequisiteMissing { prerequisite } => format!(
                "{label} cannot be checked because {} is invalid",
                prerequisite.label().to_lowercase()
            ),
            Issue::CombinedTooLong { other, max, actual } => format!(
                "{} and {} together must be at most {max} characters (got {actual})",
                other.label(),
                label.to_lowercase()
            ),
            Issue::PhoneRequired => {
                "Either a mobile phone number or a home phone number is required".to_string()
            }
            Issue::MobileInvalid => {
                format!("{label} is required because the mobile phone number is invalid")
            }
            Issue::InsuranceMismatch { ceo_employee: true } => format!(
                "{label} must be the representative plan when the employment type is company representative"
            ),
            Issue::InsuranceMismatch {
                ceo_employee: false,
            } => format!(
                "{label} representative plan is only available when the employment type is company representative"
            ),

            Issue::NotInCatalog { catalog, key } => {
                format!("{label} has unknown value \"{key}\" (catalog {catalog})")
            }

            Issue::UnclassifiedDevice => {
                format!("{label} could not be identified from the user agent")
            }

            Issue::DateComponentOutOfRange { min, max, value } => {
                format!("{label} must be between {min} and {max} (got \"{value}\")")
            }
            Issue::AgeOutOfRange { age, min, max } => {
                format!("Applicants must be between {min} and {max} years old (age {age})")
            }
            Issue::InvalidDate { year, month, day } => {
                format!("{year:04}-{month:02}-{day:02} is not a valid calendar date")
            }
            Issue::YearOutOfRange { min, max } => {
                format!("{label} must be between {min} and {max}")
            }
            Issue::BeforeBirthYear { birth_year } => {
                format!("{label} cannot be before the birth year ({birth_year})")
            }
            Issue::InFuture { current_year } => {
                format!("{label} cannot be after the current year ({current_year})")
            }
        }
    }
}

/// An issue recorded against one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: FieldName,
    pub issue: Issue,
}

impl FieldIssue {
    pub fn category(&self) -> Category {
        self.issue.category()
    }

    pub fn message(&self) -> String {
        self.issue.message(self.field)
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Every failure of one validation pass, in field order.
///
/// Never empty: a pass with no failures produces a record instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{} field(s) failed validation", .issues.len())]
pub struct ValidationReport {
    issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub(crate) fn new(issues: Vec<FieldIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue recorded for a field, if it failed.
    pub fn get(&self, field: FieldName) -> Option<&Issue> {
        self.issues
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| &entry.issue)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.issues.iter().map(|entry| entry.field)
    }

    /// Issue count per category.
    pub fn count_by_category(&self, category: Category) -> usize {
        self.issues
            .iter()
            .filter(|entry| entry.category() == category)
            .count()
    }
}
