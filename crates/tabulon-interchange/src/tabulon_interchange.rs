//! Tabulon Interchange - Export formats for table data
//!
//! Turns a table's current derived state (visible columns, full filtered and
//! sorted working sequence) into portable payloads, and delivers them
//! through pluggable sinks.

mod csv_export;
mod sink;

pub use csv_export::*;
pub use sink::*;
