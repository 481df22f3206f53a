//! Field names of a loan application.
//!
//! [`FieldName::ALL`] lists every field in validation order. Rules that read
//! other fields may only read fields that appear earlier in this list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    // Device
    UserAgent,
    // Identity
    LastName,
    FirstName,
    KanaLastName,
    KanaFirstName,
    // Birthdate
    BirthdayYear,
    BirthdayMonth,
    BirthdayDay,
    // Contact numbers
    MobilePhoneNumber,
    HomePhoneNumber,
    PreferredContact,
    // Financials
    YearlySalary,
    DesiredAmount,
    VisitUrl,
    Gender,
    Purpose,
    Marriage,
    // Address
    PostalCode,
    Address,
    BlockNumber,
    Street,
    AddressCode,
    JisAddressCode,
    // Employment
    EmployeeType,
    InsuranceType,
    PayDay,
    HireDateYear,
    OtherWork,
    CompanyName,
    KanaCompanyName,
    BusinessType,
    CompanySize,
    CompanyPhoneNumber,
    // Housing
    HousingType,
    Rent,
    MoveInYear,
    LivingAlone,
    DependentFamily,
    // Credentials
    Email,
    PinNumber,
}

impl FieldName {
    /// Every field, in validation order.
    pub const ALL: [FieldName; 40] = [
        FieldName::UserAgent,
        FieldName::LastName,
        FieldName::FirstName,
        FieldName::KanaLastName,
        FieldName::KanaFirstName,
        FieldName::BirthdayYear,
        FieldName::BirthdayMonth,
        FieldName::BirthdayDay,
        FieldName::MobilePhoneNumber,
        FieldName::HomePhoneNumber,
        FieldName::PreferredContact,
        FieldName::YearlySalary,
        FieldName::DesiredAmount,
        FieldName::VisitUrl,
        FieldName::Gender,
        FieldName::Purpose,
        FieldName::Marriage,
        FieldName::PostalCode,
        FieldName::Address,
        FieldName::BlockNumber,
        FieldName::Street,
        FieldName::AddressCode,
        FieldName::JisAddressCode,
        FieldName::EmployeeType,
        FieldName::InsuranceType,
        FieldName::PayDay,
        FieldName::HireDateYear,
        FieldName::OtherWork,
        FieldName::CompanyName,
        FieldName::KanaCompanyName,
        FieldName::BusinessType,
        FieldName::CompanySize,
        FieldName::CompanyPhoneNumber,
        FieldName::HousingType,
        FieldName::Rent,
        FieldName::MoveInYear,
        FieldName::LivingAlone,
        FieldName::DependentFamily,
        FieldName::Email,
        FieldName::PinNumber,
    ];

    /// Wire name as it appears in raw input.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::UserAgent => "user_agent",
            FieldName::LastName => "last_name",
            FieldName::FirstName => "first_name",
            FieldName::KanaLastName => "kana_last_name",
            FieldName::KanaFirstName => "kana_first_name",
            FieldName::BirthdayYear => "birthday_year",
            FieldName::BirthdayMonth => "birthday_month",
            FieldName::BirthdayDay => "birthday_day",
            FieldName::MobilePhoneNumber => "mobile_phone_number",
            FieldName::HomePhoneNumber => "home_phone_number",
            FieldName::PreferredContact => "preferred_contact",
            FieldName::YearlySalary => "yearly_salary",
            FieldName::DesiredAmount => "desired_amount",
            FieldName::VisitUrl => "visit_url",
            FieldName::Gender => "gender",
            FieldName::Purpose => "purpose",
            FieldName::Marriage => "marriage",
            FieldName::PostalCode => "postal_code",
            FieldName::Address => "address",
            FieldName::BlockNumber => "block_number",
            FieldName::Street => "street",
            FieldName::AddressCode => "address_code",
            FieldName::JisAddressCode => "jis_address_code",
            FieldName::EmployeeType => "employee_type",
            FieldName::InsuranceType => "insurance_type",
            FieldName::PayDay => "pay_day",
            FieldName::HireDateYear => "hire_date_year",
            FieldName::OtherWork => "other_work",
            FieldName::CompanyName => "company_name",
            FieldName::KanaCompanyName => "kana_company_name",
            FieldName::BusinessType => "business_type",
            FieldName::CompanySize => "company_size",
            FieldName::CompanyPhoneNumber => "company_phone_number",
            FieldName::HousingType => "housing_type",
            FieldName::Rent => "rent",
            FieldName::MoveInYear => "move_in_year",
            FieldName::LivingAlone => "living_alone",
            FieldName::DependentFamily => "dependent_family",
            FieldName::Email => "email",
            FieldName::PinNumber => "pin_number",
        }
    }

    /// Human-facing label used in issue messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::UserAgent => "Device",
            FieldName::LastName => "Last name",
            FieldName::FirstName => "First name",
            FieldName::KanaLastName => "Last name (kana)",
            FieldName::KanaFirstName => "First name (kana)",
            FieldName::BirthdayYear => "Birth year",
            FieldName::BirthdayMonth => "Birth month",
            FieldName::BirthdayDay => "Birth day",
            FieldName::MobilePhoneNumber => "Mobile phone number",
            FieldName::HomePhoneNumber => "Home phone number",
            FieldName::PreferredContact => "Preferred contact",
            FieldName::YearlySalary => "Yearly salary",
            FieldName::DesiredAmount => "Desired amount",
            FieldName::VisitUrl => "Visit URL",
            FieldName::Gender => "Gender",
            FieldName::Purpose => "Purpose of funds",
            FieldName::Marriage => "Marital status",
            FieldName::PostalCode => "Postal code",
            FieldName::Address => "City/ward",
            FieldName::BlockNumber => "Block number",
            FieldName::Street => "Building name",
            FieldName::AddressCode => "Address code",
            FieldName::JisAddressCode => "JIS address code",
            FieldName::EmployeeType => "Employment type",
            FieldName::InsuranceType => "Insurance type",
            FieldName::PayDay => "Pay day",
            FieldName::HireDateYear => "Hire year",
            FieldName::OtherWork => "Other work",
            FieldName::CompanyName => "Company name",
            FieldName::KanaCompanyName => "Company name (kana)",
            FieldName::BusinessType => "Business type",
            FieldName::CompanySize => "Company size",
            FieldName::CompanyPhoneNumber => "Company phone number",
            FieldName::HousingType => "Housing type",
            FieldName::Rent => "Monthly rent/mortgage",
            FieldName::MoveInYear => "Move-in year",
            FieldName::LivingAlone => "Living arrangement",
            FieldName::DependentFamily => "Dependent family members",
            FieldName::Email => "Email address",
            FieldName::PinNumber => "PIN",
        }
    }

    /// Position of this field in [`FieldName::ALL`].
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FieldName::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| ModelError::UnknownField(name.to_string()))
    }
}
