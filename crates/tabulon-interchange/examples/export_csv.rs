//! Full pipeline plus a CSV file export.
//!
//! Run with: cargo run -p tabulon-interchange --example export_csv

use anyhow::Result;
use tabulon_interchange::{CsvExporter, FileSink};
use tabulon_query::test_helpers::{employee_columns, employee_rows};
use tabulon_query::{SortDirection, Table, TableOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let mut table = Table::with_options(
        employee_columns(),
        employee_rows(),
        TableOptions::new().search(true).download(true),
    )?;
    table.set_search("eng");
    table.set_sort("salary", SortDirection::Descending);
    table.set_visibility("actions", false);

    let mut sink = FileSink::new(std::env::temp_dir());
    let filename = CsvExporter::new(&table).export(&mut sink)?;
    println!(
        "exported {} rows to {}",
        table.total_row_count(),
        sink.directory().join(filename).display()
    );

    Ok(())
}
