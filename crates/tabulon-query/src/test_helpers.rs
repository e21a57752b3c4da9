//! Canned data sets for tests and examples
//!
//! A small employee directory with enough shape to exercise search, typed
//! sorting, multi-select filtering, and pagination.

use tabulon_core::{Column, Row, Value};

/// Column set for the employee directory.
///
/// `tenure` demonstrates a derived value; `actions` a non-sortable column.
pub fn employee_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("department", "Department"),
        Column::new("position", "Position"),
        Column::new("status", "Status"),
        Column::new("salary", "Salary"),
        Column::new("tenure", "Tenure (years)").value_of(|row| {
            match row.get("hired_year").and_then(Value::as_i64) {
                Some(year) => Value::Int(2026 - year),
                None => Value::Null,
            }
        }),
        Column::new("actions", "Actions").sortable(false),
    ]
}

fn employee(
    name: &str,
    department: &str,
    position: &str,
    status: &str,
    salary: i64,
    hired_year: i64,
) -> Row {
    Row::new()
        .with("name", name)
        .with("department", department)
        .with("position", position)
        .with("status", status)
        .with("salary", salary)
        .with("hired_year", hired_year)
}

/// Fifteen employees across four departments
pub fn employee_rows() -> Vec<Row> {
    vec![
        employee("Aarav Shah", "Engineering", "Frontend Developer", "Active", 95_000, 2021),
        employee("Bianca Torres", "Marketing", "Marketing Manager", "Active", 88_000, 2019),
        employee("Chen Wei", "Engineering", "Backend Developer", "Active", 102_000, 2020),
        employee("Divya Nair", "HR", "Recruiter", "Inactive", 61_000, 2022),
        employee("Elena Petrova", "Engineering", "Engineering Manager", "Active", 140_000, 2017),
        employee("Farid Rahman", "Sales", "Account Executive", "Active", 72_000, 2023),
        employee("Grace Kim", "Engineering", "Site Reliability Engineer", "Inactive", 118_000, 2018),
        employee("Hugo Lindqvist", "Marketing", "Content Strategist", "Active", 67_000, 2024),
        employee("Isabela Costa", "Sales", "Sales Engineer", "Active", 91_000, 2021),
        employee("Jonas Weber", "HR", "HR Generalist", "Active", 58_000, 2022),
        employee("Keiko Tanaka", "Engineering", "Data Engineer", "Active", 109_000, 2019),
        employee("Liam O'Connor", "Sales", "Regional Director", "Inactive", 125_000, 2016),
        employee("Mina Haddad", "Engineering", "QA Engineer", "Active", 83_000, 2023),
        employee("Noah Fischer", "Marketing", "Growth Analyst", "Inactive", 74_000, 2022),
        employee("Priya Iyer", "HR", "People Operations Lead", "Active", 79_000, 2020),
    ]
}
