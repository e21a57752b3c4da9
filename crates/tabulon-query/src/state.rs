//! Transient query state owned by a table instance
//!
//! The state is a plain tuple of fields; every combination is valid. It is
//! created with defaults, replaced by explicit transitions, and has no
//! persistence beyond the table instance's lifetime.

use serde::{Deserialize, Serialize};
use tabulon_core::Column;

use crate::filter::FilterMap;
use crate::visibility::ColumnVisibility;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// The opposite direction
    pub fn toggled(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort: a column key (or none) and a direction
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: Option<String>,
    pub direction: SortDirection,
}

/// Toolbar affordance flags and the page size.
///
/// Flags gate what a host exposes to the user; the engine methods exist and
/// work headlessly regardless, with one exception: a disabled `search` flag
/// short-circuits the search stage entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub search: bool,
    pub filter: bool,
    pub view_columns: bool,
    pub download: bool,
    pub page_size: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            search: false,
            filter: false,
            view_columns: false,
            download: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, enabled: bool) -> Self {
        self.search = enabled;
        self
    }

    pub fn filter(mut self, enabled: bool) -> Self {
        self.filter = enabled;
        self
    }

    pub fn view_columns(mut self, enabled: bool) -> Self {
        self.view_columns = enabled;
        self
    }

    pub fn download(mut self, enabled: bool) -> Self {
        self.download = enabled;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// The full transient state of one table instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    pub search_text: String,
    pub filters: FilterMap,
    pub sort: SortSpec,
    pub visibility: ColumnVisibility,
    /// Requested page, 1-indexed. Out-of-range values are clamped when the
    /// page slice is produced, never rejected.
    pub page: usize,
}

impl QueryState {
    /// Initial state: no search, no filters, no sort, everything visible,
    /// page 1.
    pub fn new(columns: &[Column]) -> Self {
        Self {
            search_text: String::new(),
            filters: FilterMap::new(),
            sort: SortSpec::default(),
            visibility: ColumnVisibility::all_visible(columns),
            page: 1,
        }
    }
}
