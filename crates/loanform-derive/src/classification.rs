//! Gender × marital status classification.

use serde::Serialize;

use loanform_model::{CatalogKind, CatalogRegistry, MALE_KEY, MARRIED_KEY, ValidatedRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum GenderMarriage {
    MaleUnmarried = 1,
    FemaleUnmarried = 2,
    MaleMarried = 3,
    FemaleMarried = 4,
}

impl GenderMarriage {
    pub fn new(male: bool, married: bool) -> Self {
        match (male, married) {
            (true, false) => Self::MaleUnmarried,
            (false, false) => Self::FemaleUnmarried,
            (true, true) => Self::MaleMarried,
            (false, true) => Self::FemaleMarried,
        }
    }

    /// Stored code, 1 to 4.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MaleUnmarried => "Male, unmarried",
            Self::FemaleUnmarried => "Female, unmarried",
            Self::MaleMarried => "Male, married",
            Self::FemaleMarried => "Female, married",
        }
    }
}

impl From<GenderMarriage> for u8 {
    fn from(value: GenderMarriage) -> Self {
        value.code()
    }
}

/// Classify a record by its stored gender and marriage codes.
///
/// Anything other than the `MALE` code counts as female, anything other than
/// the `MARRIED` code as unmarried.
pub fn gender_marriage(record: &ValidatedRecord, catalogs: &CatalogRegistry) -> GenderMarriage {
    let is_code = |kind: CatalogKind, code: &str, key: &str| {
        catalogs
            .get(kind)
            .is_some_and(|catalog| catalog.is_code_for(code, key))
    };
    GenderMarriage::new(
        is_code(CatalogKind::Gender, &record.gender, MALE_KEY),
        is_code(CatalogKind::Marriage, &record.marriage, MARRIED_KEY),
    )
}
