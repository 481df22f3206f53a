//! Preferred contact channel.

use serde::Serialize;

use loanform_model::ValidatedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum ContactChannel {
    Home = 1,
    Mobile = 2,
}

impl ContactChannel {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home phone",
            Self::Mobile => "Mobile phone",
        }
    }
}

impl From<ContactChannel> for u8 {
    fn from(value: ContactChannel) -> Self {
        value.code()
    }
}

/// Mobile when a mobile number was given, otherwise home. The submitted
/// `preferred_contact` field is not consulted.
pub fn preferred_contact(record: &ValidatedRecord) -> ContactChannel {
    if record.mobile_phone_number.is_empty() {
        ContactChannel::Home
    } else {
        ContactChannel::Mobile
    }
}
