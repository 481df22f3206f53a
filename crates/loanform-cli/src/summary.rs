use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde::Serialize;
use serde_json::Value;

use loanform_derive::{DerivedValues, PhoneSegments};
use loanform_model::CatalogRegistry;
use loanform_validate::{Category, FieldIssue, Issue, ValidationReport};

use crate::cli::OutputFormatArg;
use crate::types::{ApplicationResult, DerivationResult, ValidationResult};

/// Whether tables may carry ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Styling {
    /// Style when stdout is a terminal.
    Auto,
    Plain,
}

pub fn print_validation(result: &ValidationResult, format: OutputFormatArg, styling: Styling) {
    match format {
        OutputFormatArg::Json => print_json(&validation_json(result)),
        OutputFormatArg::Table => match &result.outcome {
            Ok(record) => print_json(record),
            Err(report) => print_rejection(result, report, styling),
        },
    }
}

pub fn print_derivation(result: &DerivationResult, format: OutputFormatArg, styling: Styling) {
    match format {
        OutputFormatArg::Json => print_json(&derivation_json(result)),
        OutputFormatArg::Table => match &result.outcome {
            Ok(application) => println!("{}", derived_table(&application.derived, styling)),
            Err(report) => print_rejection(result, report, styling),
        },
    }
}

pub fn print_catalogs(catalogs: &CatalogRegistry, styling: Styling) {
    println!("{}", catalogs_table(catalogs, styling));
}

fn print_rejection<T>(result: &ApplicationResult<T>, report: &ValidationReport, styling: Styling) {
    println!("Application: {}", result.source);
    println!("Evaluated on: {}", result.today);
    println!("{}", issues_table(report, styling));
    println!("{}", category_summary(report));
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(error) => eprintln!("error: failed to render JSON: {error}"),
    }
}

/// Issues table: one row per failing field, in validation order.
pub fn issues_table(report: &ValidationReport, styling: Styling) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Category"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table, styling);
    align_column(&mut table, 1, CellAlignment::Center);
    for issue in report.issues() {
        table.add_row(vec![
            Cell::new(issue.field).add_attribute(Attribute::Bold),
            category_cell(issue.category()),
            Cell::new(issue.message()),
        ]);
    }
    table
}

/// One line counting issues per category, e.g. `3 issue(s): Shape 2, Enum 1`.
pub fn category_summary(report: &ValidationReport) -> String {
    let counts: Vec<String> = Category::all()
        .iter()
        .copied()
        .filter_map(|category| {
            let count = report.count_by_category(category);
            (count > 0).then(|| format!("{} {count}", category.label()))
        })
        .collect();
    format!("{} issue(s): {}", report.len(), counts.join(", "))
}

pub fn catalogs_table(catalogs: &CatalogRegistry, styling: Styling) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Catalog"),
        header_cell("Key"),
        header_cell("Code"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table, styling);
    align_column(&mut table, 2, CellAlignment::Right);
    for catalog in catalogs.catalogs() {
        for (index, entry) in catalog.entries().enumerate() {
            let name = if index == 0 {
                Cell::new(catalog.kind.as_str())
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                name,
                Cell::new(&entry.key),
                Cell::new(&entry.code),
                entry
                    .label
                    .as_deref()
                    .map_or_else(|| dim_cell("-"), Cell::new),
            ]);
        }
    }
    table
}

pub fn derived_table(derived: &DerivedValues, styling: Styling) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Value"),
        header_cell("Code"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table, styling);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Gender × marriage"),
        Cell::new(derived.gender_marriage.code()),
        Cell::new(derived.gender_marriage.label()),
    ]);
    for (label, segments) in [
        ("Mobile phone", &derived.mobile_phone),
        ("Home phone", &derived.home_phone),
        ("Company phone", &derived.company_phone),
    ] {
        table.add_row(vec![Cell::new(label), dim_cell("-"), phone_cell(segments)]);
    }
    table.add_row(vec![
        Cell::new("Preferred contact"),
        Cell::new(derived.preferred_contact.code()),
        Cell::new(derived.preferred_contact.label()),
    ]);
    table
}

/// JSON document for `validate --format json`.
pub fn validation_json(result: &ValidationResult) -> Value {
    match &result.outcome {
        Ok(record) => serde_json::json!({
            "source": result.source,
            "today": result.today.to_string(),
            "valid": true,
            "record": record,
        }),
        Err(report) => rejection_json(result, report),
    }
}

/// JSON document for `derive --format json`.
pub fn derivation_json(result: &DerivationResult) -> Value {
    match &result.outcome {
        Ok(application) => serde_json::json!({
            "source": result.source,
            "today": result.today.to_string(),
            "valid": true,
            "record": &application.record,
            "derived": &application.derived,
        }),
        Err(report) => rejection_json(result, report),
    }
}

fn rejection_json<T>(result: &ApplicationResult<T>, report: &ValidationReport) -> Value {
    let issues: Vec<IssueRow<'_>> = report.issues().iter().map(IssueRow::from).collect();
    serde_json::json!({
        "source": result.source,
        "today": result.today.to_string(),
        "valid": false,
        "issues": issues,
    })
}

#[derive(Serialize)]
struct IssueRow<'a> {
    field: String,
    category: &'static str,
    message: String,
    detail: &'a Issue,
}

impl<'a> From<&'a FieldIssue> for IssueRow<'a> {
    fn from(issue: &'a FieldIssue) -> Self {
        Self {
            field: issue.field.to_string(),
            category: issue.category().label(),
            message: issue.message(),
            detail: &issue.issue,
        }
    }
}

/// Non-empty segments joined with `-`.
pub fn format_phone(segments: &PhoneSegments) -> String {
    [&segments.prefix, &segments.local, &segments.subscriber]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("-")
}

fn phone_cell(segments: &PhoneSegments) -> Cell {
    if segments.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(format_phone(segments))
    }
}

pub fn apply_table_style(table: &mut Table, styling: Styling) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if styling == Styling::Plain {
        table.force_no_tty();
    }
}

fn apply_issue_table_style(table: &mut Table, styling: Styling) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(24)),
        ColumnConstraint::UpperBoundary(Width::Fixed(16)),
        ColumnConstraint::UpperBoundary(Width::Percentage(70)),
    ]);
    if styling == Styling::Plain {
        table.force_no_tty();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn category_cell(category: Category) -> Cell {
    let color = match category {
        Category::Shape => Color::Red,
        Category::Script => Color::Magenta,
        Category::CrossField => Color::Yellow,
        Category::Enum => Color::Blue,
        Category::Classification => Color::DarkYellow,
        Category::Date => Color::Cyan,
    };
    Cell::new(category.label()).fg(color)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
