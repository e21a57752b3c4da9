//! CSV export for table working sets
//!
//! Serialization is pure: `to_csv` renders the visible columns against the
//! full filtered and sorted working sequence, never just the current page.
//! Delivery is a separate concern handled by an `ExportSink`.

use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tabulon_query::Table;

/// Errors during CSV export
#[derive(Debug, Error)]
pub enum CsvExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// UTF-8 byte order mark prepended to exported payloads so spreadsheet
/// applications pick the right encoding.
pub const UTF8_BOM: &str = "\u{feff}";

/// Field separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldDelimiter {
    #[default]
    Comma,
    Tab,
    Semicolon,
    Pipe,
}

impl FieldDelimiter {
    pub fn as_char(&self) -> char {
        match self {
            FieldDelimiter::Comma => ',',
            FieldDelimiter::Tab => '\t',
            FieldDelimiter::Semicolon => ';',
            FieldDelimiter::Pipe => '|',
        }
    }
}

/// Record separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordDelimiter {
    CrLf,
    Cr,
    #[default]
    Lf,
}

impl RecordDelimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordDelimiter::CrLf => "\r\n",
            RecordDelimiter::Cr => "\r",
            RecordDelimiter::Lf => "\n",
        }
    }
}

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    pub include_headers: bool,
    pub include_bom: bool,
    pub field_delimiter: FieldDelimiter,
    pub record_delimiter: RecordDelimiter,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            include_headers: true,
            include_bom: true,
            field_delimiter: FieldDelimiter::default(),
            record_delimiter: RecordDelimiter::default(),
        }
    }
}

/// Wrap a field in double quotes, doubling any embedded quote.
fn quote_field(value: &str) -> String {
    let escaped = value.replace('"', "\"\"");
    format!("\"{}\"", escaped)
}

/// Default export filename for a given date: `table-export-YYYY-MM-DD.csv`
pub fn export_filename(date: chrono::NaiveDate) -> String {
    format!("table-export-{}.csv", date.format("%Y-%m-%d"))
}

/// Default export filename for today's local date
pub fn default_export_filename() -> String {
    export_filename(chrono::Local::now().date_naive())
}

/// CSV exporter over one table's current derived state
pub struct CsvExporter<'a> {
    table: &'a Table,
    options: CsvOptions,
}

impl<'a> CsvExporter<'a> {
    /// Create an exporter with default options
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            options: CsvOptions::default(),
        }
    }

    /// Override the format options
    pub fn with_options(mut self, options: CsvOptions) -> Self {
        self.options = options;
        self
    }

    /// Render the payload: one header record (unless disabled) followed by
    /// one record per working row, visible columns only. Nullish cells
    /// become an empty (still quoted) field. An empty working set yields a
    /// header-only payload.
    pub fn to_csv(&self) -> String {
        let columns = self.table.visible_columns();
        let rows = self.table.working_rows();
        let field_delim = self.options.field_delimiter.as_char().to_string();
        let record_delim = self.options.record_delimiter.as_str();

        let mut out = String::new();
        if self.options.include_bom {
            out.push_str(UTF8_BOM);
        }

        if self.options.include_headers {
            let header = columns
                .iter()
                .map(|c| quote_field(&c.name))
                .collect::<Vec<_>>()
                .join(&field_delim);
            out.push_str(&header);
            out.push_str(record_delim);
        }

        for row in &rows {
            let record = columns
                .iter()
                .map(|c| {
                    let value = c.value(row);
                    if value.is_null() {
                        quote_field("")
                    } else {
                        quote_field(&value.to_string())
                    }
                })
                .collect::<Vec<_>>()
                .join(&field_delim);
            out.push_str(&record);
            out.push_str(record_delim);
        }

        tracing::debug!(
            columns = columns.len(),
            rows = rows.len(),
            bytes = out.len(),
            "rendered csv payload"
        );
        out
    }

    /// Write the payload to any writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), CsvExportError> {
        writer.write_all(self.to_csv().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
