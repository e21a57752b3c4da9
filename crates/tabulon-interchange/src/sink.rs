//! Delivery sinks for exported payloads
//!
//! Serialization produces a string; what happens to it (a file save, a
//! download trigger, an HTTP response body) is a platform concern behind
//! the `ExportSink` trait.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::csv_export::{CsvExportError, CsvExporter, default_export_filename};

/// One-shot delivery of a rendered payload
pub trait ExportSink {
    /// Deliver the payload under the given filename. There is no retry or
    /// partial-failure path; an error propagates to the caller.
    fn deliver(&mut self, filename: &str, payload: &str) -> Result<(), CsvExportError>;
}

/// Sink that saves payloads into a directory
#[derive(Debug, Clone)]
pub struct FileSink {
    directory: PathBuf,
}

impl FileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl ExportSink for FileSink {
    fn deliver(&mut self, filename: &str, payload: &str) -> Result<(), CsvExportError> {
        let path = self.directory.join(filename);
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(payload.as_bytes())?;
        writer.flush()?;
        tracing::debug!(path = %path.display(), bytes = payload.len(), "delivered export");
        Ok(())
    }
}

impl CsvExporter<'_> {
    /// Render and deliver under the default dated filename. Returns the
    /// filename used.
    pub fn export(&self, sink: &mut dyn ExportSink) -> Result<String, CsvExportError> {
        let filename = default_export_filename();
        sink.deliver(&filename, &self.to_csv())?;
        Ok(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabulon_core::{Column, Row};
    use tabulon_query::Table;

    fn sample_table() -> Table {
        let columns = vec![Column::new("name", "Name")];
        let rows = vec![Row::new().with("name", "Ada")];
        Table::new(columns, rows).expect("valid table")
    }

    #[test]
    fn test_file_sink_writes_payload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut sink = FileSink::new(dir.path());
        sink.deliver("out.csv", "\"Name\"\n\"Ada\"\n").expect("deliver");
        let written = std::fs::read_to_string(dir.path().join("out.csv")).expect("read back");
        assert_eq!(written, "\"Name\"\n\"Ada\"\n");
    }

    #[test]
    fn test_export_uses_dated_default_filename() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut sink = FileSink::new(dir.path());
        let table = sample_table();
        let filename = CsvExporter::new(&table).export(&mut sink).expect("export");
        assert!(filename.starts_with("table-export-"));
        assert!(filename.ends_with(".csv"));
        assert!(dir.path().join(&filename).exists());
    }

    #[test]
    fn test_delivery_error_propagates() {
        let mut sink = FileSink::new("/nonexistent/directory/for/tabulon");
        let table = sample_table();
        let err = CsvExporter::new(&table).export(&mut sink).unwrap_err();
        assert!(matches!(err, CsvExportError::Io(_)));
    }
}
