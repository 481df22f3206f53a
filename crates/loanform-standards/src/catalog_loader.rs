//! Catalog loader.
//!
//! Catalogs are stored in a single CSV file, one row per entry:
//!
//! ```text
//! Catalog,Key,Code,Label
//! gender,MALE,1,男性
//! gender,FEMALE,2,女性
//! insurance_type,CEO,0,社長・代表者
//! ```
//!
//! - `Catalog` names one of the nine catalogs (see [`CatalogKind`])
//! - `Key` is the value callers submit
//! - `Code` is the value stored on the validated record
//! - `Label` is optional display text
//!
//! Every catalog must be present with at least one entry, and keys must be
//! unique within a catalog.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use loanform_model::{Catalog, CatalogEntry, CatalogKind, CatalogRegistry};

use crate::error::StandardsError;
use crate::paths::CatalogSource;

/// Catalogs bundled with the crate.
pub const EMBEDDED_CATALOGS: &str = include_str!("../data/catalogs.csv");

const COL_CATALOG: &str = "Catalog";
const COL_KEY: &str = "Key";
const COL_CODE: &str = "Code";
const COL_LABEL: &str = "Label";

/// Load catalogs from the default source (env var, else embedded).
pub fn load_default_catalogs() -> Result<CatalogRegistry, StandardsError> {
    load_catalogs_from(&CatalogSource::resolve(None))
}

/// Load catalogs from a resolved source.
pub fn load_catalogs_from(source: &CatalogSource) -> Result<CatalogRegistry, StandardsError> {
    let registry = match source {
        CatalogSource::File(path) => load_catalogs(path)?,
        CatalogSource::Embedded => parse_catalogs(EMBEDDED_CATALOGS.as_bytes(), "<embedded>")?,
    };
    info!(
        source = %source.describe(),
        catalog_count = registry.catalogs().count(),
        "catalogs loaded"
    );
    Ok(registry)
}

/// Load catalogs from a CSV file.
pub fn load_catalogs(path: &Path) -> Result<CatalogRegistry, StandardsError> {
    let file = std::fs::File::open(path).map_err(|e| StandardsError::io(path, e))?;
    parse_catalogs(file, &path.display().to_string())
}

/// Parse catalogs from CSV content.
///
/// `source_name` is only used in error messages.
pub fn parse_catalogs<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<CatalogRegistry, StandardsError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let csv_error = |source: csv::Error| StandardsError::Csv {
        source_name: source_name.to_string(),
        source,
    };

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = ColumnIndex::from_headers(&headers, source_name)?;

    let mut catalogs: BTreeMap<CatalogKind, Catalog> = BTreeMap::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, csv::Position::line);
        let invalid_row = |message: String| StandardsError::InvalidRow {
            source_name: source_name.to_string(),
            line,
            message,
        };

        let catalog_name = columns.get(&record, columns.catalog);
        if catalog_name.is_empty() {
            continue;
        }
        let kind: CatalogKind = catalog_name
            .parse()
            .map_err(|e: loanform_model::ModelError| invalid_row(e.to_string()))?;

        let key = columns.get(&record, columns.key);
        let code = columns.get(&record, columns.code);
        if key.is_empty() || code.is_empty() {
            return Err(invalid_row(format!(
                "catalog {kind} entry needs both a key and a code"
            )));
        }
        let label = columns
            .label
            .map(|idx| columns.get(&record, idx))
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        catalogs
            .entry(kind)
            .or_insert_with(|| Catalog::new(kind))
            .add_entry(CatalogEntry {
                key: key.to_string(),
                code: code.to_string(),
                label,
            })
            .map_err(|e| invalid_row(e.to_string()))?;
    }

    let mut registry = CatalogRegistry::new();
    for (kind, catalog) in catalogs {
        debug!(catalog = %kind, entries = catalog.len(), "catalog parsed");
        registry.add_catalog(catalog);
    }
    registry
        .ensure_complete()
        .map_err(|source| StandardsError::Catalog {
            source_name: source_name.to_string(),
            source,
        })?;
    Ok(registry)
}

struct ColumnIndex {
    catalog: usize,
    key: usize,
    code: usize,
    label: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, source_name: &str) -> Result<Self, StandardsError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header.trim_matches('\u{feff}').eq_ignore_ascii_case(column))
        };
        let require = |column: &'static str| {
            find(column).ok_or_else(|| StandardsError::MissingColumn {
                source_name: source_name.to_string(),
                column,
            })
        };
        Ok(Self {
            catalog: require(COL_CATALOG)?,
            key: require(COL_KEY)?,
            code: require(COL_CODE)?,
            label: find(COL_LABEL),
        })
    }

    fn get<'r>(&self, record: &'r StringRecord, idx: usize) -> &'r str {
        record.get(idx).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalogs_are_complete() {
        let registry = parse_catalogs(EMBEDDED_CATALOGS.as_bytes(), "<embedded>").unwrap();
        for kind in CatalogKind::ALL {
            assert!(registry.get(kind).is_some_and(|c| !c.is_empty()), "{kind}");
        }
    }

    #[test]
    fn embedded_ceo_codes() {
        let registry = parse_catalogs(EMBEDDED_CATALOGS.as_bytes(), "<embedded>").unwrap();
        let insurance = registry.get(CatalogKind::InsuranceType).unwrap();
        assert_eq!(insurance.code_of("CEO"), Some("0"));
        let employee = registry.get(CatalogKind::EmployeeType).unwrap();
        assert_eq!(employee.code_of("CEO"), Some("1"));
    }
}
