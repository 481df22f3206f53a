//! Values derived from a validated loan application.
//!
//! - **classification**: gender × marital status code
//! - **phone**: prefix/local/subscriber segments per phone number
//! - **contact**: preferred contact channel
//!
//! All functions are pure and infallible; they assume a record produced by
//! the validator.

pub mod classification;
pub mod contact;
pub mod phone;

use serde::Serialize;
use tracing::debug;

use loanform_model::{CatalogRegistry, ValidatedRecord};

pub use classification::{GenderMarriage, gender_marriage};
pub use contact::{ContactChannel, preferred_contact};
pub use phone::{PhoneSegments, split_company, split_home, split_mobile};

/// Everything derived from one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedValues {
    pub gender_marriage: GenderMarriage,
    pub mobile_phone: PhoneSegments,
    pub home_phone: PhoneSegments,
    pub company_phone: PhoneSegments,
    pub preferred_contact: ContactChannel,
}

/// Compute every derived value for a record.
pub fn derive(record: &ValidatedRecord, catalogs: &CatalogRegistry) -> DerivedValues {
    let derived = DerivedValues {
        gender_marriage: gender_marriage(record, catalogs),
        mobile_phone: split_mobile(&record.mobile_phone_number),
        home_phone: split_home(&record.home_phone_number),
        company_phone: split_company(&record.company_phone_number),
        preferred_contact: preferred_contact(record),
    };
    debug!(
        gender_marriage = derived.gender_marriage.code(),
        preferred_contact = derived.preferred_contact.code(),
        "derived values computed"
    );
    derived
}
