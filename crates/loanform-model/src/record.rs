//! The normalized application produced by a successful validation pass.

use serde::{Deserialize, Serialize};

use crate::error::MissingValue;
use crate::field::FieldName;
use crate::input::RawInput;
use crate::value::{FieldValue, ValidatedFields};

/// A fully validated loan application.
///
/// Catalog-backed fields (`gender`, `purpose`, `marriage`, `employee_type`,
/// `insurance_type`, `business_type`, `company_size`, `housing_type`,
/// `living_alone`) hold stored codes, not the submitted keys. `user_agent`
/// holds the classified device family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    pub user_agent: String,
    pub last_name: String,
    pub first_name: String,
    pub kana_last_name: String,
    pub kana_first_name: String,
    pub birthday_year: String,
    pub birthday_month: String,
    pub birthday_day: String,
    pub mobile_phone_number: String,
    pub home_phone_number: String,
    pub preferred_contact: String,
    pub yearly_salary: i64,
    pub desired_amount: i64,
    pub visit_url: String,
    pub gender: String,
    pub purpose: String,
    pub marriage: String,
    pub postal_code: String,
    pub address: String,
    pub block_number: String,
    pub street: String,
    pub address_code: String,
    pub jis_address_code: String,
    pub employee_type: String,
    pub insurance_type: String,
    pub pay_day: i64,
    pub hire_date_year: String,
    pub other_work: String,
    pub company_name: String,
    pub kana_company_name: String,
    pub business_type: String,
    pub company_size: String,
    pub company_phone_number: String,
    pub housing_type: String,
    pub rent: i64,
    pub move_in_year: String,
    pub living_alone: String,
    pub dependent_family: i64,
    pub email: String,
    pub pin_number: String,
}

impl ValidatedRecord {
    /// Assemble a record from a context holding every field.
    ///
    /// # Errors
    ///
    /// Returns [`MissingValue`] naming the first field that a field is absent or holds the
    /// wrong kind of value.
    pub fn from_fields(fields: &ValidatedFields) -> Result<Self, MissingValue> {
        let text = |field: FieldName| -> Result<String, MissingValue> {
            fields
                .text(field)
                .map(str::to_string)
                .ok_or(MissingValue { field })
        };
        let integer = |field: FieldName| -> Result<i64, MissingValue> {
            fields
                .integer(field)
                .ok_or(MissingValue { field })
        };

        Ok(Self {
            user_agent: text(FieldName::UserAgent)?,
            last_name: text(FieldName::LastName)?,
            first_name: text(FieldName::FirstName)?,
            kana_last_name: text(FieldName::KanaLastName)?,
            kana_first_name: text(FieldName::KanaFirstName)?,
            birthday_year: text(FieldName::BirthdayYear)?,
            birthday_month: text(FieldName::BirthdayMonth)?,
            birthday_day: text(FieldName::BirthdayDay)?,
            mobile_phone_number: text(FieldName::MobilePhoneNumber)?,
            home_phone_number: text(FieldName::HomePhoneNumber)?,
            preferred_contact: text(FieldName::PreferredContact)?,
            yearly_salary: integer(FieldName::YearlySalary)?,
            desired_amount: integer(FieldName::DesiredAmount)?,
            visit_url: text(FieldName::VisitUrl)?,
            gender: text(FieldName::Gender)?,
            purpose: text(FieldName::Purpose)?,
            marriage: text(FieldName::Marriage)?,
            postal_code: text(FieldName::PostalCode)?,
            address: text(FieldName::Address)?,
            block_number: text(FieldName::BlockNumber)?,
            street: text(FieldName::Street)?,
            address_code: text(FieldName::AddressCode)?,
            jis_address_code: text(FieldName::JisAddressCode)?,
            employee_type: text(FieldName::EmployeeType)?,
            insurance_type: text(FieldName::InsuranceType)?,
            pay_day: integer(FieldName::PayDay)?,
            hire_date_year: text(FieldName::HireDateYear)?,
            other_work: text(FieldName::OtherWork)?,
            company_name: text(FieldName::CompanyName)?,
            kana_company_name: text(FieldName::KanaCompanyName)?,
            business_type: text(FieldName::BusinessType)?,
            company_size: text(FieldName::CompanySize)?,
            company_phone_number: text(FieldName::CompanyPhoneNumber)?,
            housing_type: text(FieldName::HousingType)?,
            rent: integer(FieldName::Rent)?,
            move_in_year: text(FieldName::MoveInYear)?,
            living_alone: text(FieldName::LivingAlone)?,
            dependent_family: integer(FieldName::DependentFamily)?,
            email: text(FieldName::Email)?,
            pin_number: text(FieldName::PinNumber)?,
        })
    }

    /// Value of a single field.
    pub fn value(&self, field: FieldName) -> FieldValue {
        let text = |value: &String| FieldValue::Text(value.clone());
        match field {
            FieldName::UserAgent => text(&self.user_agent),
            FieldName::LastName => text(&self.last_name),
            FieldName::FirstName => text(&self.first_name),
            FieldName::KanaLastName => text(&self.kana_last_name),
            FieldName::KanaFirstName => text(&self.kana_first_name),
            FieldName::BirthdayYear => text(&self.birthday_year),
            FieldName::BirthdayMonth => text(&self.birthday_month),
            FieldName::BirthdayDay => text(&self.birthday_day),
            FieldName::MobilePhoneNumber => text(&self.mobile_phone_number),
            FieldName::HomePhoneNumber => text(&self.home_phone_number),
            FieldName::PreferredContact => text(&self.preferred_contact),
            FieldName::YearlySalary => FieldValue::Integer(self.yearly_salary),
            FieldName::DesiredAmount => FieldValue::Integer(self.desired_amount),
            FieldName::VisitUrl => text(&self.visit_url),
            FieldName::Gender => text(&self.gender),
            FieldName::Purpose => text(&self.purpose),
            FieldName::Marriage => text(&self.marriage),
            FieldName::PostalCode => text(&self.postal_code),
            FieldName::Address => text(&self.address),
            FieldName::BlockNumber => text(&self.block_number),
            FieldName::Street => text(&self.street),
            FieldName::AddressCode => text(&self.address_code),
            FieldName::JisAddressCode => text(&self.jis_address_code),
            FieldName::EmployeeType => text(&self.employee_type),
            FieldName::InsuranceType => text(&self.insurance_type),
            FieldName::PayDay => FieldValue::Integer(self.pay_day),
            FieldName::HireDateYear => text(&self.hire_date_year),
            FieldName::OtherWork => text(&self.other_work),
            FieldName::CompanyName => text(&self.company_name),
            FieldName::KanaCompanyName => text(&self.kana_company_name),
            FieldName::BusinessType => text(&self.business_type),
            FieldName::CompanySize => text(&self.company_size),
            FieldName::CompanyPhoneNumber => text(&self.company_phone_number),
            FieldName::HousingType => text(&self.housing_type),
            FieldName::Rent => FieldValue::Integer(self.rent),
            FieldName::MoveInYear => text(&self.move_in_year),
            FieldName::LivingAlone => text(&self.living_alone),
            FieldName::DependentFamily => FieldValue::Integer(self.dependent_family),
            FieldName::Email => text(&self.email),
            FieldName::PinNumber => text(&self.pin_number),
        }
    }

    /// Feed the normalized values back as raw input.
    ///
    /// Catalog-backed fields carry codes; callers that want to re-validate
    /// must swap them back to catalog keys first.
    pub fn to_raw_input(&self) -> RawInput {
        let mut input = RawInput::new();
        for field in FieldName::ALL {
            match self.value(field) {
                FieldValue::Text(value) => input.insert(field, value),
                FieldValue::Integer(value) => input.insert(field, value),
            }
        }
        input
    }
}
