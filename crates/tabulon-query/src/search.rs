//! Free-text search over the working row set
//!
//! A row matches when the normalized needle is a substring of at least one
//! column's normalized derived value. Every declared column is searched,
//! including hidden ones, so toggling visibility never changes which rows
//! appear.

use tabulon_core::{Column, Row};

use crate::normalize::{normalize, normalize_text};

/// Check whether a single row matches an already-normalized needle.
pub fn row_matches(row: &Row, columns: &[Column], needle: &str) -> bool {
    columns
        .iter()
        .any(|column| normalize(&column.value(row)).contains(needle))
}

/// Apply the search stage to a working set of row indices.
///
/// An empty needle (after trimming and normalization) is an identity
/// transition: the working set is returned unchanged.
pub fn apply(working: Vec<usize>, rows: &[Row], columns: &[Column], text: &str) -> Vec<usize> {
    let needle = normalize_text(text.trim());
    if needle.is_empty() {
        return working;
    }
    working
        .into_iter()
        .filter(|&ix| row_matches(&rows[ix], columns, &needle))
        .collect()
}
