//! Per-field rules and the ordered field table.
//!
//! Each field runs its shape check and then its rules in order. A rule
//! receives the previous rule's output, so a catalog rule hands the stored
//! code (not the submitted key) to whatever follows it.

mod address;
mod birthdate;
mod contact;
mod credentials;
mod employment;
mod housing;
mod identity;

use chrono::NaiveDate;

use loanform_model::{
    CatalogKind, CatalogRegistry, FieldName, FieldSpec, FieldValue, RawValue, ValidatedFields,
};

use crate::device::DeviceClassifier;
use crate::issue::Issue;
use crate::shape;

/// Collaborators shared by every rule during one pass.
pub(crate) struct RuleEnv<'a> {
    pub catalogs: &'a CatalogRegistry,
    pub classifier: &'a dyn DeviceClassifier,
    pub today: NaiveDate,
}

type IndependentRule = fn(&RuleEnv<'_>, FieldValue) -> Result<FieldValue, Issue>;
type DependentRule = fn(&RuleEnv<'_>, FieldValue, &ValidatedFields) -> Result<FieldValue, Issue>;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Rule {
    /// Reads only the field's own value.
    Independent(IndependentRule),
    /// Also reads fields validated earlier in the pass.
    Dependent(DependentRule),
    /// Catalog membership; replaces the key with its stored code.
    Catalog(CatalogKind),
}

impl Rule {
    fn apply(
        &self,
        env: &RuleEnv<'_>,
        value: FieldValue,
        context: &ValidatedFields,
    ) -> Result<FieldValue, Issue> {
        match self {
            Rule::Independent(rule) => rule(env, value),
            Rule::Dependent(rule) => rule(env, value, context),
            Rule::Catalog(kind) => catalog_code(env, *kind, &value),
        }
    }
}

/// One field and its rules, in the order they run.
#[derive(Debug)]
pub(crate) struct FieldCheck {
    pub field: FieldName,
    rules: &'static [Rule],
}

impl FieldCheck {
    /// Shape check followed by each rule; the first failure wins.
    pub fn run(
        &self,
        env: &RuleEnv<'_>,
        raw: Option<&RawValue>,
        context: &ValidatedFields,
    ) -> Result<FieldValue, Issue> {
        let mut value = shape::check(&FieldSpec::of(self.field), raw)?;
        for rule in self.rules {
            value = rule.apply(env, value, context)?;
        }
        Ok(value)
    }
}

/// Every field in validation order.
pub(crate) const FIELD_CHECKS: &[FieldCheck] = &[
    FieldCheck {
        field: FieldName::UserAgent,
        rules: &[Rule::Independent(identity::user_agent)],
    },
    FieldCheck {
        field: FieldName::LastName,
        rules: &[Rule::Independent(identity::last_name)],
    },
    FieldCheck {
        field: FieldName::FirstName,
        rules: &[Rule::Dependent(identity::first_name)],
    },
    FieldCheck {
        field: FieldName::KanaLastName,
        rules: &[Rule::Independent(identity::kana_last_name)],
    },
    FieldCheck {
        field: FieldName::KanaFirstName,
        rules: &[Rule::Dependent(identity::kana_first_name)],
    },
    FieldCheck {
        field: FieldName::BirthdayYear,
        rules: &[Rule::Independent(birthdate::four_digit_year)],
    },
    FieldCheck {
        field: FieldName::BirthdayMonth,
        rules: &[Rule::Independent(birthdate::month)],
    },
    FieldCheck {
        field: FieldName::BirthdayDay,
        rules: &[
            Rule::Dependent(birthdate::day_and_age),
            Rule::Dependent(birthdate::calendar_date),
        ],
    },
    FieldCheck {
        field: FieldName::MobilePhoneNumber,
        rules: &[Rule::Independent(contact::mobile_phone)],
    },
    FieldCheck {
        field: FieldName::HomePhoneNumber,
        rules: &[Rule::Dependent(contact::home_phone)],
    },
    FieldCheck {
        field: FieldName::PreferredContact,
        rules: &[],
    },
    FieldCheck {
        field: FieldName::YearlySalary,
        rules: &[],
    },
    FieldCheck {
        field: FieldName::DesiredAmount,
        rules: &[],
    },
    FieldCheck {
        field: FieldName::VisitUrl,
        rules: &[],
    },
    FieldCheck {
        field: FieldName::Gender,
        rules: &[Rule::Catalog(CatalogKind::Gender)],
    },
    FieldCheck {
        field: FieldName::Purpose,
        rules: &[Rule::Catalog(CatalogKind::Purpose)],
    },
    FieldCheck {
        field: FieldName::Marriage,
        rules: &[Rule::Catalog(CatalogKind::Marriage)],
    },
    FieldCheck {
        field: FieldName::PostalCode,
        rules: &[Rule::Independent(address::postal_code)],
    },
    FieldCheck {
        field: FieldName::Address,
        rules: &[Rule::Independent(address::optional_valid_chars)],
    },
    FieldCheck {
        field: FieldName::BlockNumber,
        rules: &[Rule::Independent(address::valid_chars)],
    },
    FieldCheck {
        field: FieldName::Street,
        rules: &[Rule::Dependent(address::street)],
    },
    FieldCheck {
        field: FieldName::AddressCode,
        rules: &[Rule::Independent(address::address_code)],
    },
    FieldCheck {
        field: FieldName::JisAddressCode,
        rules: &[Rule::Independent(address::jis_address_code)],
    },
    FieldCheck {
        field: FieldName::EmployeeType,
        rules: &[Rule::Catalog(CatalogKind::EmployeeType)],
    },
    FieldCheck {
        field: FieldName::InsuranceType,
        rules: &[
            Rule::Catalog(CatalogKind::InsuranceType),
            Rule::Dependent(employment::insurance_matches_employment),
        ],
    },
    FieldCheck {
        field: FieldName::PayDay,
        rules: &[],
    },
    FieldCheck {
        field: FieldName::HireDateYear,
        rules: &[
            Rule::Independent(birthdate::four_digit_year),
            Rule::Dependent(employment::hire_year_window),
        ],
    },
    FieldCheck {
        field: FieldName::OtherWork,
        rules: &[Rule::Independent(address::optional_valid_chars)],
    },
    FieldCheck {
        field: FieldName::CompanyName,
        rules: &[Rule::Independent(address::valid_chars)],
    },
    FieldCheck {
        field: FieldName::KanaCompanyName,
        rules: &[Rule::Independent(employment::kana_company_name)],
    },
    FieldCheck {
        field: FieldName::BusinessType,
        rules: &[Rule::Catalog(CatalogKind::BusinessType)],
    },
    FieldCheck {
        field: FieldName::CompanySize,
        rules: &[Rule::Catalog(CatalogKind::CompanySize)],
    },
    FieldCheck {
        field: FieldName::CompanyPhoneNumber,
        rules: &[Rule::Independent(contact::company_phone)],
    },
    FieldCheck {
        field: FieldName::HousingType,
        rules: &[Rule::Catalog(CatalogKind::HousingType)],
    },
    FieldCheck {
        field: FieldName::Rent,
        rules: &[],
    },
    FieldCheck {
        field: FieldName::MoveInYear,
        rules: &[
            Rule::Independent(birthdate::four_digit_year),
            Rule::Dependent(housing::move_in_year_window),
        ],
    },
    FieldCheck {
        field: FieldName::LivingAlone,
        rules: &[Rule::Catalog(CatalogKind::LivingTogether)],
    },
    FieldCheck {
        field: FieldName::DependentFamily,
        rules: &[],
    },
    FieldCheck {
        field: FieldName::Email,
        rules: &[Rule::Independent(credentials::email)],
    },
    FieldCheck {
        field: FieldName::PinNumber,
        rules: &[Rule::Independent(credentials::pin_number)],
    },
];

fn catalog_code(env: &RuleEnv<'_>, kind: CatalogKind, value: &FieldValue) -> Result<FieldValue, Issue> {
    let key = text(value);
    env.catalogs
        .get(kind)
        .and_then(|catalog| catalog.code_of(key))
        .map(|code| FieldValue::Text(code.to_string()))
        .ok_or_else(|| Issue::NotInCatalog {
            catalog: kind,
            key: key.to_string(),
        })
}

/// Text content of a shape-checked text field.
fn text(value: &FieldValue) -> &str {
    value.as_text().unwrap_or_default()
}

/// Text of an earlier field, or a prerequisite failure if it did not pass.
fn prerequisite(context: &ValidatedFields, field: FieldName) -> Result<&str, Issue> {
    context
        .text(field)
        .ok_or(Issue::PrerequisiteMissing {
            prerequisite: field,
        })
}

/// Integer value of an earlier 4-digit or 2-digit text field.
fn prerequisite_number<T: std::str::FromStr>(
    context: &ValidatedFields,
    field: FieldName,
) -> Result<T, Issue> {
    prerequisite(context, field)?
        .parse()
        .map_err(|_| Issue::PrerequisiteMissing {
            prerequisite: field,
        })
}

fn is_digits(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}
