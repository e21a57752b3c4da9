//! Column visibility projection
//!
//! Tracks which declared columns project into rendered cells and exports.
//! Invariant: at least one column stays visible at all times. An offending
//! transition is rejected as a no-op, never an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tabulon_core::Column;

/// Visibility map for a table's declared columns.
///
/// Keys missing from the map count as visible, so a freshly constructed
/// table shows every column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnVisibility {
    visible: HashMap<String, bool>,
}

impl ColumnVisibility {
    /// All declared columns visible
    pub fn all_visible(columns: &[Column]) -> Self {
        Self {
            visible: columns.iter().map(|c| (c.key.clone(), true)).collect(),
        }
    }

    /// Whether a column is currently visible
    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.get(key).copied().unwrap_or(true)
    }

    /// Number of visible declared columns
    pub fn visible_count(&self, columns: &[Column]) -> usize {
        columns.iter().filter(|c| self.is_visible(&c.key)).count()
    }

    /// Show or hide one column.
    ///
    /// Hiding the last remaining visible column is rejected; the return
    /// value reports whether the change was applied. Unknown keys are
    /// ignored.
    pub fn set_visible(&mut self, columns: &[Column], key: &str, visible: bool) -> bool {
        if !columns.iter().any(|c| c.key == key) {
            tracing::debug!(column = key, "ignored visibility change for unknown column");
            return false;
        }
        if !visible && self.is_visible(key) && self.visible_count(columns) == 1 {
            tracing::debug!(column = key, "rejected hiding the last visible column");
            return false;
        }
        self.visible.insert(key.to_string(), visible);
        true
    }

    /// Toggle all columns at once.
    ///
    /// If any column is hidden, every column becomes visible. If every
    /// column is already visible, all but the first declared column are
    /// hidden, so the projection never becomes empty.
    pub fn toggle_all(&mut self, columns: &[Column]) {
        if columns.is_empty() {
            return;
        }
        let all_visible = self.visible_count(columns) == columns.len();
        if all_visible {
            for (ix, column) in columns.iter().enumerate() {
                self.visible.insert(column.key.clone(), ix == 0);
            }
        } else {
            for column in columns {
                self.visible.insert(column.key.clone(), true);
            }
        }
    }

    /// The visible columns, in declaration order
    pub fn visible_columns<'a>(&self, columns: &'a [Column]) -> Vec<&'a Column> {
        columns.iter().filter(|c| self.is_visible(&c.key)).collect()
    }
}
