//! Shared fixtures for validator integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;

use loanform_model::{Catalog, CatalogKind, CatalogRegistry, FieldName, RawInput, RawValue};
use loanform_validate::{
    ApplicationValidator, FixedClock, Issue, UserAgentClassifier, ValidationOutcome,
};

pub const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn today() -> NaiveDate {
    date(2024, 6, 15)
}

fn catalog(kind: CatalogKind, entries: &[(&str, &str)]) -> Catalog {
    entries
        .iter()
        .fold(Catalog::new(kind), |catalog, (key, code)| {
            catalog.with_entry(key, code).unwrap()
        })
}

/// Small programmatic catalog set.
pub fn catalogs() -> CatalogRegistry {
    CatalogRegistry::new()
        .with_catalog(catalog(CatalogKind::Gender, &[("MALE", "1"), ("FEMALE", "2")]))
        .with_catalog(catalog(
            CatalogKind::Purpose,
            &[("LIVING_EXPENSES", "1"), ("EDUCATION", "5")],
        ))
        .with_catalog(catalog(
            CatalogKind::Marriage,
            &[("UNMARRIED", "1"), ("MARRIED", "2")],
        ))
        .with_catalog(catalog(
            CatalogKind::EmployeeType,
            &[("CEO", "1"), ("REGULAR", "2"), ("PART_TIME", "5")],
        ))
        .with_catalog(catalog(
            CatalogKind::InsuranceType,
            &[("CEO", "0"), ("SOCIAL", "1"), ("NATIONAL", "2")],
        ))
        .with_catalog(catalog(
            CatalogKind::HousingType,
            &[("OWN_HOUSE", "1"), ("RENTAL", "3")],
        ))
        .with_catalog(catalog(
            CatalogKind::LivingTogether,
            &[("ALONE", "1"), ("WITH_FAMILY", "2")],
        ))
        .with_catalog(catalog(
            CatalogKind::BusinessType,
            &[("MANUFACTURING", "2"), ("RETAIL", "4")],
        ))
        .with_catalog(catalog(
            CatalogKind::CompanySize,
            &[("UNDER_10", "1"), ("OVER_1000", "7")],
        ))
}

/// An application that passes every rule on [`today`].
pub fn valid_input() -> RawInput {
    RawInput::new()
        .with(FieldName::UserAgent, IPHONE_UA)
        .with(FieldName::LastName, "山田")
        .with(FieldName::FirstName, "太郎")
        .with(FieldName::KanaLastName, "ヤマダ")
        .with(FieldName::KanaFirstName, "タロウ")
        .with(FieldName::BirthdayYear, "1990")
        .with(FieldName::BirthdayMonth, "06")
        .with(FieldName::BirthdayDay, "15")
        .with(FieldName::MobilePhoneNumber, "09012345678")
        .with(FieldName::HomePhoneNumber, "")
        .with(FieldName::PreferredContact, "mobile")
        .with(FieldName::YearlySalary, 500)
        .with(FieldName::DesiredAmount, 50)
        .with(FieldName::VisitUrl, "https://example.com/apply")
        .with(FieldName::Gender, "MALE")
        .with(FieldName::Purpose, "LIVING_EXPENSES")
        .with(FieldName::Marriage, "MARRIED")
        .with(FieldName::PostalCode, "1000001")
        .with(FieldName::Address, "千代田区")
        .with(FieldName::BlockNumber, "千代田1-1")
        .with(FieldName::Street, "")
        .with(FieldName::AddressCode, "13101ABCDE")
        .with(FieldName::JisAddressCode, "13101")
        .with(FieldName::EmployeeType, "REGULAR")
        .with(FieldName::InsuranceType, "SOCIAL")
        .with(FieldName::PayDay, 25)
        .with(FieldName::HireDateYear, "2015")
        .with(FieldName::OtherWork, "")
        .with(FieldName::CompanyName, "株式会社サンプル")
        .with(FieldName::KanaCompanyName, "カブシキガイシャサンプル")
        .with(FieldName::BusinessType, "RETAIL")
        .with(FieldName::CompanySize, "UNDER_10")
        .with(FieldName::CompanyPhoneNumber, "0312345678")
        .with(FieldName::HousingType, "RENTAL")
        .with(FieldName::Rent, 80000)
        .with(FieldName::MoveInYear, "2018")
        .with(FieldName::LivingAlone, "ALONE")
        .with(FieldName::DependentFamily, 0)
        .with(FieldName::Email, "Taro.Yamada@Example.JP")
        .with(FieldName::PinNumber, "1234")
}

pub fn validate_on(input: &RawInput, today: NaiveDate) -> ValidationOutcome {
    let catalogs = catalogs();
    let classifier = UserAgentClassifier::new();
    let clock = FixedClock(today);
    ApplicationValidator::new(&catalogs, &classifier, &clock)
        .unwrap()
        .validate(input)
}

pub fn validate(input: &RawInput) -> ValidationOutcome {
    validate_on(input, today())
}

/// Issue recorded for `field`, panicking if the input validated.
pub fn issue_for(input: &RawInput, field: FieldName) -> Option<Issue> {
    let report = validate(input).expect_err("input should fail");
    report.get(field).cloned()
}

pub fn with(field: FieldName, value: impl Into<RawValue>) -> RawInput {
    valid_input().with(field, value)
}
