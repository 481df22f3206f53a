#![deny(unsafe_code)]

pub mod catalog_loader;
pub mod error;
pub mod paths;

pub use crate::catalog_loader::{
    EMBEDDED_CATALOGS, load_catalogs, load_catalogs_from, load_default_catalogs, parse_catalogs,
};
pub use crate::error::StandardsError;
pub use crate::paths::{CATALOGS_ENV_VAR, CatalogSource};
