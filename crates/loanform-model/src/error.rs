use thiserror::Error;

use crate::catalog::CatalogKind;
use crate::field::FieldName;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown catalog: {0}")]
    UnknownCatalog(String),
    #[error("duplicate key {key} in catalog {catalog}")]
    DuplicateKey { catalog: CatalogKind, key: String },
    #[error("catalog {0} has no entries")]
    EmptyCatalog(CatalogKind),
    #[error("catalog {0} is missing")]
    MissingCatalog(CatalogKind),
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// A record could not be assembled from a validated context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("validated field {field} is missing or has the wrong kind")]
pub struct MissingValue {
    pub field: FieldName,
}
