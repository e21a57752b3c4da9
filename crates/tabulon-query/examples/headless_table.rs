//! Drive the table engine from a plain binary host.
//!
//! Run with: cargo run -p tabulon-query --example headless_table

use anyhow::Result;
use tabulon_query::test_helpers::{employee_columns, employee_rows};
use tabulon_query::{SortDirection, Table, TableOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut table = Table::with_options(
        employee_columns(),
        employee_rows(),
        TableOptions::new().search(true).filter(true).page_size(5),
    )?;

    table.set_search("eng");
    table.set_filter("status", ["Active"]);
    table.set_sort("salary", SortDirection::Descending);

    let info = table.page_info();
    println!("{}", info.status_text());
    for row in table.visible_rows() {
        let name = row.get("name").map(ToString::to_string).unwrap_or_default();
        let salary = row.get("salary").map(ToString::to_string).unwrap_or_default();
        println!("{name:<20} {salary:>8}");
    }

    Ok(())
}
