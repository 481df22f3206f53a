//! Integration tests for the field rule engine.

mod common;

use loanform_model::{CatalogKind, FieldName, RawInput};
use loanform_validate::{
    ApplicationValidator, Category, DeviceClass, FixedClock, Issue, UserAgentClassifier,
};

use common::{catalogs, date, issue_for, valid_input, validate, validate_on, with};

#[test]
fn valid_application_is_normalized() {
    let record = validate(&valid_input()).expect("valid input");

    assert_eq!(record.user_agent, "iPhone");
    assert_eq!(record.gender, "1");
    assert_eq!(record.purpose, "1");
    assert_eq!(record.marriage, "2");
    assert_eq!(record.employee_type, "2");
    assert_eq!(record.insurance_type, "1");
    assert_eq!(record.business_type, "4");
    assert_eq!(record.company_size, "1");
    assert_eq!(record.housing_type, "3");
    assert_eq!(record.living_alone, "1");
    assert_eq!(record.email, "Taro.Yamada@example.jp");
    assert_eq!(record.birthday_month, "06");
    assert_eq!(record.rent, 80000);
}

#[test]
fn enum_fields_hold_catalog_codes() {
    let catalogs = catalogs();
    let input = valid_input();
    let record = validate(&input).unwrap();
    for kind in CatalogKind::ALL {
        let field = kind.field();
        let key = match input.get(field) {
            Some(loanform_model::RawValue::Text(key)) => key.clone(),
            other => panic!("{field}: {other:?}"),
        };
        let expected = catalogs.get(kind).unwrap().code_of(&key).unwrap();
        assert_eq!(record.value(field).as_text(), Some(expected), "{field}");
    }
}

#[test]
fn embedded_catalogs_validate_every_key() {
    let catalogs =
        loanform_standards::load_catalogs_from(&loanform_standards::CatalogSource::Embedded)
            .unwrap();
    let classifier = UserAgentClassifier::new();
    let clock = FixedClock(common::today());
    let validator = ApplicationValidator::new(&catalogs, &classifier, &clock).unwrap();

    let housing = catalogs.get(CatalogKind::HousingType).unwrap();
    for entry in housing.entries() {
        let input = valid_input().with(FieldName::HousingType, entry.key.as_str());
        let record = validator.validate(&input).expect("embedded keys are valid");
        assert_eq!(record.housing_type, entry.code);
    }
}

#[test]
fn revalidating_a_record_is_idempotent() {
    let catalogs = catalogs();
    let user_agents = [
        common::IPHONE_UA,
        "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1",
        "Mozilla/5.0 (iPod touch; CPU OS 15_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148",
        "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
        "Mozilla/5.0 (Linux; Android 13; SM-X700) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
        "DoCoMo/2.0 P903i(c100;TB;W24H12)",
        "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
    ];
    let mut families = Vec::new();

    for user_agent in user_agents {
        let record = validate(&with(FieldName::UserAgent, user_agent)).expect(user_agent);
        families.push(record.user_agent.clone());

        let mut raw = record.to_raw_input();
        for kind in CatalogKind::ALL {
            let field = kind.field();
            let code = record.value(field);
            let key = catalogs
                .get(kind)
                .and_then(|catalog| catalog.key_of(code.as_text().unwrap()))
                .unwrap();
            raw.insert(field, key);
        }

        let again = validate(&raw).expect("normalized values revalidate");
        assert_eq!(again, record, "{user_agent}");
    }

    families.sort();
    let mut expected = loanform_validate::device::FAMILIES.map(str::to_string).to_vec();
    expected.sort();
    assert_eq!(families, expected);
}

#[test]
fn age_depends_on_injected_date() {
    let input = valid_input()
        .with(FieldName::BirthdayYear, "2004")
        .with(FieldName::BirthdayMonth, "06")
        .with(FieldName::BirthdayDay, "15");

    let report = validate_on(&input, date(2024, 6, 14)).unwrap_err();
    assert_eq!(
        report.get(FieldName::BirthdayDay),
        Some(&Issue::AgeOutOfRange {
            age: 19,
            min: 20,
            max: 69
        })
    );
    assert!(validate_on(&input, date(2024, 6, 15)).is_ok());
}

#[test]
fn age_window_upper_bound() {
    let input = valid_input()
        .with(FieldName::BirthdayYear, "1954")
        .with(FieldName::BirthdayMonth, "06")
        .with(FieldName::BirthdayDay, "16")
        .with(FieldName::HireDateYear, "1980")
        .with(FieldName::MoveInYear, "1980");
    assert!(validate_on(&input, date(2024, 6, 15)).is_ok());
    assert_eq!(
        validate_on(&input, date(2024, 6, 16))
            .unwrap_err()
            .get(FieldName::BirthdayDay),
        Some(&Issue::AgeOutOfRange {
            age: 70,
            min: 20,
            max: 69
        })
    );
}

#[test]
fn impossible_calendar_date_is_rejected() {
    let input = valid_input()
        .with(FieldName::BirthdayMonth, "02")
        .with(FieldName::BirthdayDay, "30");
    assert_eq!(
        issue_for(&input, FieldName::BirthdayDay),
        Some(Issue::InvalidDate {
            year: 1990,
            month: 2,
            day: 30
        })
    );
}

#[test]
fn month_out_of_range() {
    let issue = issue_for(&with(FieldName::BirthdayMonth, "13"), FieldName::BirthdayMonth);
    assert_eq!(issue.map(|issue| issue.category()), Some(Category::Date));
}

#[test]
fn name_length_boundary() {
    let nineteen = valid_input()
        .with(FieldName::LastName, "山".repeat(9))
        .with(FieldName::FirstName, "太".repeat(10));
    assert!(validate(&nineteen).is_ok());

    let twenty = valid_input()
        .with(FieldName::LastName, "山".repeat(10))
        .with(FieldName::FirstName, "太".repeat(10));
    assert_eq!(
        issue_for(&twenty, FieldName::FirstName),
        Some(Issue::CombinedTooLong {
            other: FieldName::LastName,
            max: 19,
            actual: 20
        })
    );
}

#[test]
fn kana_name_length_boundary() {
    let thirty = valid_input()
        .with(FieldName::KanaLastName, "ア".repeat(15))
        .with(FieldName::KanaFirstName, "イ".repeat(15));
    assert_eq!(
        issue_for(&thirty, FieldName::KanaFirstName),
        Some(Issue::CombinedTooLong {
            other: FieldName::KanaLastName,
            max: 29,
            actual: 30
        })
    );
}

#[test]
fn script_violations() {
    assert_eq!(
        issue_for(&with(FieldName::LastName, "Yamada"), FieldName::LastName),
        Some(Issue::NotFullWidth)
    );
    assert_eq!(
        issue_for(&with(FieldName::KanaLastName, "やまだ"), FieldName::KanaLastName),
        Some(Issue::NotKatakana)
    );
    assert_eq!(
        issue_for(&with(FieldName::CompanyName, "Sample\\Co"), FieldName::CompanyName),
        Some(Issue::InvalidCharacters)
    );
}

#[test]
fn phone_mutual_requirement() {
    let neither = valid_input()
        .with(FieldName::MobilePhoneNumber, "")
        .with(FieldName::HomePhoneNumber, "");
    assert_eq!(
        issue_for(&neither, FieldName::HomePhoneNumber),
        Some(Issue::PhoneRequired)
    );

    let mobile_only = valid_input()
        .with(FieldName::MobilePhoneNumber, "08012345678")
        .with(FieldName::HomePhoneNumber, "");
    assert!(validate(&mobile_only).is_ok());

    let home_only = valid_input()
        .with(FieldName::MobilePhoneNumber, "")
        .with(FieldName::HomePhoneNumber, "0312345678");
    assert!(validate(&home_only).is_ok());

    let ip_home = valid_input()
        .with(FieldName::MobilePhoneNumber, "")
        .with(FieldName::HomePhoneNumber, "05012345678");
    assert!(validate(&ip_home).is_ok());
}

#[test]
fn home_phone_format() {
    let short_ip = valid_input().with(FieldName::HomePhoneNumber, "0501234567");
    assert!(matches!(
        issue_for(&short_ip, FieldName::HomePhoneNumber),
        Some(Issue::InvalidFormat { .. })
    ));
    let long_landline = valid_input().with(FieldName::HomePhoneNumber, "03123456789");
    assert!(matches!(
        issue_for(&long_landline, FieldName::HomePhoneNumber),
        Some(Issue::InvalidFormat { .. })
    ));
    let dashed = valid_input().with(FieldName::HomePhoneNumber, "03-1234-56");
    assert_eq!(
        issue_for(&dashed, FieldName::HomePhoneNumber),
        Some(Issue::NotDigits)
    );
}

#[test]
fn invalid_mobile_with_empty_home() {
    let input = valid_input()
        .with(FieldName::MobilePhoneNumber, "06012345678")
        .with(FieldName::HomePhoneNumber, "");
    let report = validate(&input).unwrap_err();
    assert!(matches!(
        report.get(FieldName::MobilePhoneNumber),
        Some(Issue::InvalidFormat { .. })
    ));
    assert_eq!(
        report.get(FieldName::HomePhoneNumber),
        Some(&Issue::MobileInvalid)
    );

    let with_home = input.with(FieldName::HomePhoneNumber, "0312345678");
    let report = validate(&with_home).unwrap_err();
    assert_eq!(report.get(FieldName::HomePhoneNumber), None);
}

#[test]
fn company_phone_prefixes() {
    let eleven = with(FieldName::CompanyPhoneNumber, "05012345678");
    assert!(validate(&eleven).is_ok());
    let ten_with_prefix = with(FieldName::CompanyPhoneNumber, "0901234567");
    assert!(matches!(
        issue_for(&ten_with_prefix, FieldName::CompanyPhoneNumber),
        Some(Issue::InvalidFormat { .. })
    ));
}

#[test]
fn insurance_employment_cross_check() {
    let ceo_without_ceo_insurance = valid_input()
        .with(FieldName::EmployeeType, "CEO")
        .with(FieldName::InsuranceType, "SOCIAL");
    assert_eq!(
        issue_for(&ceo_without_ceo_insurance, FieldName::InsuranceType),
        Some(Issue::InsuranceMismatch { ceo_employee: true })
    );

    let ceo_insurance_for_employee = valid_input()
        .with(FieldName::EmployeeType, "REGULAR")
        .with(FieldName::InsuranceType, "CEO");
    assert_eq!(
        issue_for(&ceo_insurance_for_employee, FieldName::InsuranceType),
        Some(Issue::InsuranceMismatch {
            ceo_employee: false
        })
    );

    let matching = valid_input()
        .with(FieldName::EmployeeType, "CEO")
        .with(FieldName::InsuranceType, "CEO");
    let record = validate(&matching).unwrap();
    assert_eq!(record.insurance_type, "0");
}

#[test]
fn insurance_needs_valid_employment_type() {
    let input = valid_input().with(FieldName::EmployeeType, "ASTRONAUT");
    let report = validate(&input).unwrap_err();
    assert_eq!(
        report.get(FieldName::EmployeeType),
        Some(&Issue::NotInCatalog {
            catalog: CatalogKind::EmployeeType,
            key: "ASTRONAUT".to_string()
        })
    );
    assert_eq!(
        report.get(FieldName::InsuranceType),
        Some(&Issue::PrerequisiteMissing {
            prerequisite: FieldName::EmployeeType
        })
    );
}

#[test]
fn failed_birth_year_propagates_to_dependents() {
    let input = valid_input().with(FieldName::BirthdayYear, "19x0");
    let report = validate(&input).unwrap_err();
    let prerequisite = Issue::PrerequisiteMissing {
        prerequisite: FieldName::BirthdayYear,
    };

    let fields: Vec<FieldName> = report.fields().collect();
    assert_eq!(
        fields,
        vec![
            FieldName::BirthdayYear,
            FieldName::BirthdayDay,
            FieldName::HireDateYear,
            FieldName::MoveInYear,
        ]
    );
    assert_eq!(report.get(FieldName::BirthdayDay), Some(&prerequisite));
    assert_eq!(report.get(FieldName::HireDateYear), Some(&prerequisite));
    assert_eq!(report.get(FieldName::MoveInYear), Some(&prerequisite));
    assert_eq!(report.count_by_category(Category::CrossField), 3);
}

#[test]
fn failed_last_name_propagates_to_first_name() {
    let input = valid_input().with(FieldName::LastName, "山".repeat(19));
    let report = validate(&input).unwrap_err();
    assert_eq!(
        report.get(FieldName::LastName),
        Some(&Issue::TooLong {
            max: 18,
            actual: 19
        })
    );
    assert_eq!(
        report.get(FieldName::FirstName),
        Some(&Issue::PrerequisiteMissing {
            prerequisite: FieldName::LastName
        })
    );
}

#[test]
fn street_and_block_number() {
    let too_long = valid_input()
        .with(FieldName::BlockNumber, "1".repeat(20))
        .with(FieldName::Street, "ビル".repeat(7));
    assert_eq!(
        issue_for(&too_long, FieldName::Street),
        Some(Issue::CombinedTooLong {
            other: FieldName::BlockNumber,
            max: 32,
            actual: 34
        })
    );

    let missing_block = valid_input()
        .with(FieldName::BlockNumber, "")
        .with(FieldName::Street, "");
    let report = validate(&missing_block).unwrap_err();
    assert_eq!(report.get(FieldName::BlockNumber), Some(&Issue::Required));
    assert_eq!(
        report.get(FieldName::Street),
        Some(&Issue::PrerequisiteMissing {
            prerequisite: FieldName::BlockNumber
        })
    );
}

#[test]
fn year_windows() {
    assert_eq!(
        issue_for(&with(FieldName::HireDateYear, "2025"), FieldName::HireDateYear),
        Some(Issue::YearOutOfRange {
            min: 1990,
            max: 2024
        })
    );
    assert_eq!(
        issue_for(&with(FieldName::MoveInYear, "1989"), FieldName::MoveInYear),
        Some(Issue::BeforeBirthYear { birth_year: 1990 })
    );
    assert_eq!(
        issue_for(&with(FieldName::MoveInYear, "2025"), FieldName::MoveInYear),
        Some(Issue::InFuture { current_year: 2024 })
    );
    assert!(validate(&with(FieldName::MoveInYear, "1990")).is_ok());
    assert!(validate(&with(FieldName::HireDateYear, "2024")).is_ok());
}

#[test]
fn email_format() {
    assert!(matches!(
        issue_for(&with(FieldName::Email, "taro@localhost"), FieldName::Email),
        Some(Issue::InvalidFormat { .. })
    ));
    assert!(matches!(
        issue_for(&with(FieldName::Email, "taro..x@example.com"), FieldName::Email),
        Some(Issue::InvalidFormat { .. })
    ));
    assert!(matches!(
        issue_for(&with(FieldName::Email, "taro@example.co.jp"), FieldName::Email),
        Some(Issue::InvalidFormat { .. })
    ));
    let record = validate(&with(FieldName::Email, "a+b{c}@Example.COM")).unwrap();
    assert_eq!(record.email, "a+b{c}@example.com");
}

#[test]
fn unclassified_user_agent_is_rejected() {
    assert_eq!(
        issue_for(&with(FieldName::UserAgent, "curl/8.4.0"), FieldName::UserAgent),
        Some(Issue::UnclassifiedDevice)
    );
}

#[test]
fn injected_classifier_is_used() {
    let catalogs = catalogs();
    let classifier = |_: &str| DeviceClass::Family("Kiosk".to_string());
    let clock = FixedClock(common::today());
    let validator = ApplicationValidator::new(&catalogs, &classifier, &clock).unwrap();
    let record = validator
        .validate(&valid_input().with(FieldName::UserAgent, "kiosk-terminal/1.0"))
        .unwrap();
    assert_eq!(record.user_agent, "Kiosk");
}

#[test]
fn integer_fields_accept_numeric_strings() {
    let record = validate(&with(FieldName::PayDay, "25")).unwrap();
    assert_eq!(record.pay_day, 25);
    assert_eq!(
        issue_for(&with(FieldName::PinNumber, 1234), FieldName::PinNumber),
        Some(Issue::ExpectedText)
    );
}

#[test]
fn optional_fields_may_be_absent() {
    let mut input = valid_input();
    for field in [
        FieldName::Street,
        FieldName::AddressCode,
        FieldName::JisAddressCode,
        FieldName::OtherWork,
        FieldName::VisitUrl,
        FieldName::PreferredContact,
        FieldName::HomePhoneNumber,
    ] {
        input.remove(field);
    }
    let record = validate(&input).unwrap();
    assert_eq!(record.street, "");
    assert_eq!(record.preferred_contact, "");
}

#[test]
fn unknown_keys_are_ignored() {
    let input = valid_input();
    let mut extended: RawInput = [("campaign", "spring")].into_iter().collect();
    for field in FieldName::ALL {
        if let Some(value) = input.get(field) {
            extended.insert(field, value.clone());
        }
    }
    assert!(validate(&extended).is_ok());
}

#[test]
fn every_failure_is_reported_in_field_order() {
    let input = valid_input()
        .with(FieldName::PinNumber, "12")
        .with(FieldName::Gender, "OTHER")
        .with(FieldName::PostalCode, "100-0001")
        .with(FieldName::UserAgent, "curl/8.4.0");
    let report = validate(&input).unwrap_err();
    let fields: Vec<FieldName> = report.fields().collect();
    assert_eq!(
        fields,
        vec![
            FieldName::UserAgent,
            FieldName::Gender,
            FieldName::PostalCode,
            FieldName::PinNumber,
        ]
    );
}

#[test]
fn report_messages() {
    let input = valid_input()
        .with(FieldName::LastName, "Yamada")
        .with(FieldName::Gender, "OTHER")
        .with(FieldName::MobilePhoneNumber, "")
        .with(FieldName::HomePhoneNumber, "")
        .with(FieldName::PinNumber, "12");
    let report = validate(&input).unwrap_err();
    let rendered: Vec<String> = report.issues().iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(rendered.join("\n"), @r#"
    last_name: Last name must be written in full-width hiragana, katakana or kanji
    first_name: First name cannot be checked because last name is invalid
    home_phone_number: Either a mobile phone number or a home phone number is required
    gender: Gender has unknown value "OTHER" (catalog gender)
    pin_number: PIN must be at least 4 characters (got 2)
    "#);
}

#[test]
fn report_serializes_issue_kinds() {
    let report = validate(&with(FieldName::Rent, -1)).unwrap_err();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["issues"][0]["field"], "rent");
    assert_eq!(json["issues"][0]["issue"]["kind"], "out_of_range");
    assert_eq!(json["issues"][0]["issue"]["min"], 0);
}

#[test]
fn incomplete_catalogs_are_refused() {
    let catalogs = loanform_model::CatalogRegistry::new();
    let classifier = UserAgentClassifier::new();
    let clock = FixedClock(common::today());
    assert!(ApplicationValidator::new(&catalogs, &classifier, &clock).is_err());
}
