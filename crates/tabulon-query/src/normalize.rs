//! Text normalization for search matching
//!
//! Normalized forms are used only for matching, never for display or export.

use tabulon_core::Value;

/// Normalize free text for matching: lowercase, then keep only ASCII
/// letters, ASCII digits, and whitespace.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Normalize a cell value for matching. NULL normalizes to the empty string.
pub fn normalize(value: &Value) -> String {
    if value.is_null() {
        String::new()
    } else {
        normalize_text(&value.to_string())
    }
}
