//! Ordered field rule engine for loan applications.
//!
//! [`ApplicationValidator`] turns a [`loanform_model::RawInput`] into either a
//! [`loanform_model::ValidatedRecord`] or a [`ValidationReport`] listing every
//! failing field in validation order.

pub mod clock;
pub mod device;
mod engine;
pub mod issue;
mod rules;
pub mod script;
pub mod shape;

pub use clock::{Clock, FixedClock, SystemClock};
pub use device::{DeviceClass, DeviceClassifier, UserAgentClassifier};
pub use engine::{ApplicationValidator, ValidationOutcome};
pub use issue::{Category, FieldIssue, Issue, ValidationReport};
