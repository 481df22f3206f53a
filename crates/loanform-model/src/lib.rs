//! Data model for loan application intake.

pub mod catalog;
pub mod error;
pub mod field;
pub mod input;
pub mod record;
pub mod spec;
pub mod value;

pub use catalog::{
    CEO_KEY, Catalog, CatalogEntry, CatalogKind, CatalogRegistry, MALE_KEY, MARRIED_KEY,
};
pub use error::{MissingValue, ModelError, Result};
pub use field::FieldName;
pub use input::{RawInput, RawValue};
pub use record::ValidatedRecord;
pub use spec::{FieldKind, FieldSpec, Presence};
pub use value::{FieldValue, ValidatedFields};
