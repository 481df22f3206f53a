//! Settings file and flag resolution.
//!
//! Settings come from a TOML file:
//!
//! ```toml
//! catalogs = "catalogs/production.csv"
//! today = "2024-06-15"
//! ```
//!
//! Command-line flags win over the file. A relative `catalogs` path is
//! resolved against the directory holding the settings file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use loanform_standards::CatalogSource;

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILENAME: &str = "loanform.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Catalog CSV path.
    pub catalogs: Option<PathBuf>,
    /// Fixed evaluation date, `YYYY-MM-DD`.
    pub today: Option<String>,
}

impl Settings {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse settings")
    }

    /// The configured evaluation date, if any.
    pub fn today(&self) -> Result<Option<NaiveDate>> {
        self.today
            .as_deref()
            .map(|value| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .with_context(|| format!("invalid `today` setting {value:?}"))
            })
            .transpose()
    }
}

/// Load settings from `explicit`, or from [`DEFAULT_CONFIG_FILENAME`] in the
/// working directory when it exists.
///
/// An explicit path that cannot be read is an error; a missing default file
/// yields default settings.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            if !default.is_file() {
                debug!("no settings file, using defaults");
                return Ok(Settings::default());
            }
            default
        }
    };
    load_settings_file(&path)
}

pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read settings {}", path.display()))?;
    let mut settings =
        Settings::parse(&content).with_context(|| format!("in {}", path.display()))?;
    if let Some(catalogs) = settings.catalogs.take() {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        settings.catalogs = Some(base.join(catalogs));
    }
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Effective options after merging flags over settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub catalogs: CatalogSource,
    /// `None` means the system clock.
    pub today: Option<NaiveDate>,
}

impl RunOptions {
    pub fn resolve(
        settings: &Settings,
        catalogs_flag: Option<&Path>,
        today_flag: Option<NaiveDate>,
    ) -> Result<Self> {
        let explicit = catalogs_flag
            .map(Path::to_path_buf)
            .or_else(|| settings.catalogs.clone());
        let today = match today_flag {
            Some(today) => Some(today),
            None => settings.today()?,
        };
        Ok(Self {
            catalogs: CatalogSource::resolve(explicit),
            today,
        })
    }
}
