//! Catalog source resolution.

use std::path::PathBuf;

/// Environment variable for overriding the catalog file.
pub const CATALOGS_ENV_VAR: &str = "LOANFORM_CATALOGS";

/// Where catalogs are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A CSV file on disk.
    File(PathBuf),
    /// The CSV bundled with this crate.
    Embedded,
}

impl CatalogSource {
    /// Resolve the catalog source.
    ///
    /// Resolution order:
    /// 1. `explicit` path (CLI flag or config file)
    /// 2. `LOANFORM_CATALOGS` environment variable
    /// 3. the embedded default catalogs
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return Self::File(path);
        }
        match std::env::var(CATALOGS_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Embedded,
        }
    }

    /// Short description for logs and reports.
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Embedded => "<embedded>".to_string(),
        }
    }
}
