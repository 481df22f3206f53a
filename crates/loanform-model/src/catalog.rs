//! Enumerated catalogs.
//!
//! A catalog is a closed mapping from a human-facing key (e.g. `MALE`) to the
//! code stored on a validated record (e.g. `1`). Each of the nine enumerated
//! fields is backed by exactly one catalog:
//!
//! | catalog           | field            |
//! |-------------------|------------------|
//! | `gender`          | `gender`         |
//! | `purpose`         | `purpose`        |
//! | `marriage`        | `marriage`       |
//! | `employee_type`   | `employee_type`  |
//! | `insurance_type`  | `insurance_type` |
//! | `housing_type`    | `housing_type`   |
//! | `living_together` | `living_alone`   |
//! | `business_type`   | `business_type`  |
//! | `company_size`    | `company_size`   |
//!
//! Keys are matched exactly (case-sensitive).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::FieldName;

/// Key shared by the employee-type and insurance-type catalogs for company
/// representatives.
pub const CEO_KEY: &str = "CEO";
/// Gender catalog key for male applicants.
pub const MALE_KEY: &str = "MALE";
/// Marriage catalog key for married applicants.
pub const MARRIED_KEY: &str = "MARRIED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Gender,
    Purpose,
    Marriage,
    EmployeeType,
    InsuranceType,
    HousingType,
    LivingTogether,
    BusinessType,
    CompanySize,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 9] = [
        CatalogKind::Gender,
        CatalogKind::Purpose,
        CatalogKind::Marriage,
        CatalogKind::EmployeeType,
        CatalogKind::InsuranceType,
        CatalogKind::HousingType,
        CatalogKind::LivingTogether,
        CatalogKind::BusinessType,
        CatalogKind::CompanySize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Gender => "gender",
            CatalogKind::Purpose => "purpose",
            CatalogKind::Marriage => "marriage",
            CatalogKind::EmployeeType => "employee_type",
            CatalogKind::InsuranceType => "insurance_type",
            CatalogKind::HousingType => "housing_type",
            CatalogKind::LivingTogether => "living_together",
            CatalogKind::BusinessType => "business_type",
            CatalogKind::CompanySize => "company_size",
        }
    }

    /// The field validated against this catalog.
    pub fn field(&self) -> FieldName {
        match self {
            CatalogKind::Gender => FieldName::Gender,
            CatalogKind::Purpose => FieldName::Purpose,
            CatalogKind::Marriage => FieldName::Marriage,
            CatalogKind::EmployeeType => FieldName::EmployeeType,
            CatalogKind::InsuranceType => FieldName::InsuranceType,
            CatalogKind::HousingType => FieldName::HousingType,
            CatalogKind::LivingTogether => FieldName::LivingAlone,
            CatalogKind::BusinessType => FieldName::BusinessType,
            CatalogKind::CompanySize => FieldName::CompanySize,
        }
    }

    /// The catalog backing a field, if the field is catalog-backed.
    pub fn for_field(field: FieldName) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field() == field)
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ModelError::UnknownCatalog(s.trim().to_string()))
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Human-facing key submitted by the caller.
    pub key: String,
    /// Code stored on the validated record.
    pub code: String,
    /// Optional display label.
    pub label: Option<String>,
}

/// One closed key → code mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub kind: CatalogKind,
    /// Entries by key.
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            kind,
            entries: BTreeMap::new(),
        }
    }

    /// Add an entry.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateKey`] if the key is already present.
    pub fn add_entry(&mut self, entry: CatalogEntry) -> Result<()> {
        if self.entries.contains_key(&entry.key) {
            return Err(ModelError::DuplicateKey {
                catalog: self.kind,
                key: entry.key,
            });
        }
        self.entries.insert(entry.key.clone(), entry);
        Ok(())
    }

    /// Builder-style add for programmatic catalogs.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateKey`] if the key is already present.
    pub fn with_entry(mut self, key: &str, code: &str) -> Result<Self> {
        self.add_entry(CatalogEntry {
            key: key.to_string(),
            code: code.to_string(),
            label: None,
        })?;
        Ok(self)
    }

    /// Check whether a key exists.
    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stored code for a key.
    pub fn code_of(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.code.as_str())
    }

    /// Key for a stored code (first match in key order).
    pub fn key_of(&self, code: &str) -> Option<&str> {
        self.entries
            .values()
            .find(|entry| entry.code == code)
            .map(|entry| entry.key.as_str())
    }

    /// Check whether `code` is the code stored for `key`.
    pub fn is_code_for(&self, code: &str, key: &str) -> bool {
        self.code_of(key).is_some_and(|stored| stored == code)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The nine catalogs used by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRegistry {
    catalogs: BTreeMap<CatalogKind, Catalog>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a catalog.
    pub fn add_catalog(&mut self, catalog: Catalog) {
        self.catalogs.insert(catalog.kind, catalog);
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.add_catalog(catalog);
        self
    }

    pub fn get(&self, kind: CatalogKind) -> Option<&Catalog> {
        self.catalogs.get(&kind)
    }

    pub fn catalogs(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.values()
    }

    /// Check that every catalog is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns the first missing or empty catalog.
    pub fn ensure_complete(&self) -> Result<()> {
        for kind in CatalogKind::ALL {
            match self.catalogs.get(&kind) {
                None => return Err(ModelError::MissingCatalog(kind)),
                Some(catalog) if catalog.is_empty() => {
                    return Err(ModelError::EmptyCatalog(kind));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
