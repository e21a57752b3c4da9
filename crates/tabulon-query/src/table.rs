//! Table orchestration
//!
//! A `Table` owns the declared columns, the row snapshot, the toolbar
//! options, and the transient query state. Every transition replaces part of
//! the state and recomputes the derived row order by running the fixed
//! pipeline search -> filter -> sort; pagination and column projection are
//! applied by the read accessors. Recomputation is a pure function of state
//! and inputs, so the engine can be driven from any host.

use tabulon_core::{Column, Result, Row, TableError};
use uuid::Uuid;

use crate::filter;
use crate::pagination::{self, PageInfo};
use crate::search;
use crate::sort;
use crate::state::{QueryState, SortDirection, SortSpec, TableOptions};
use crate::visibility::ColumnVisibility;

/// Recompute the working row order for a state snapshot.
///
/// Returns indices into `rows`: the rows that survive search and filter, in
/// sorted order. Pagination is not applied here; the working sequence also
/// feeds exports, which ignore the current page.
pub fn recompute(
    state: &QueryState,
    options: &TableOptions,
    columns: &[Column],
    rows: &[Row],
) -> Vec<usize> {
    let mut working: Vec<usize> = (0..rows.len()).collect();
    if options.search {
        working = search::apply(working, rows, columns, &state.search_text);
    }
    working = filter::apply(working, rows, columns, &state.filters);
    sort::apply(working, rows, columns, &state.sort)
}

/// An in-memory table instance: columns, rows, options, and query state.
pub struct Table {
    id: Uuid,
    columns: Vec<Column>,
    rows: Vec<Row>,
    options: TableOptions,
    state: QueryState,
    working: Vec<usize>,
}

impl Table {
    /// Create a table with default options.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self> {
        Self::with_options(columns, rows, TableOptions::default())
    }

    /// Create a table, validating the construction contract: column keys
    /// must be unique and the page size must be at least 1.
    pub fn with_options(
        columns: Vec<Column>,
        rows: Vec<Row>,
        options: TableOptions,
    ) -> Result<Self> {
        validate_columns(&columns)?;
        if options.page_size == 0 {
            return Err(TableError::InvalidPageSize(0));
        }
        let state = QueryState::new(&columns);
        let working = recompute(&state, &options, &columns, &rows);
        let table = Self {
            id: Uuid::new_v4(),
            columns,
            rows,
            options,
            state,
            working,
        };
        tracing::debug!(
            table_id = %table.id,
            columns = table.columns.len(),
            rows = table.rows.len(),
            "table created"
        );
        Ok(table)
    }

    /// Unique id of this table instance
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The declared columns, in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The toolbar options
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// The current query state
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    #[tracing::instrument(skip(self), fields(table_id = %self.id))]
    fn refresh(&mut self) {
        self.working = recompute(&self.state, &self.options, &self.columns, &self.rows);
        tracing::debug!(total = self.working.len(), "recomputed working sequence");
    }

    /// Set the free-text search. Resets to page 1.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.state.page = 1;
        self.refresh();
    }

    /// Replace one column's filter allow-list. An empty list clears the
    /// constraint. Resets to page 1.
    pub fn set_filter<I, S>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        let values: std::collections::BTreeSet<String> =
            values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.state.filters.remove(&key);
        } else {
            self.state.filters.insert(key, values);
        }
        self.state.page = 1;
        self.refresh();
    }

    /// Drop every filter constraint. Resets to page 1.
    pub fn clear_filters(&mut self) {
        self.state.filters.clear();
        self.state.page = 1;
        self.refresh();
    }

    /// Sort by a column. Rejected as a no-op for unknown or non-sortable
    /// columns; the return value reports whether the sort was applied.
    /// Resets to page 1 when applied.
    pub fn set_sort(&mut self, column: impl Into<String>, direction: SortDirection) -> bool {
        let column = column.into();
        match self.columns.iter().find(|c| c.key == column) {
            None => {
                tracing::debug!(column = %column, "ignored sort on unknown column");
                false
            }
            Some(c) if !c.sortable => {
                tracing::debug!(column = %column, "ignored sort on non-sortable column");
                false
            }
            Some(_) => {
                self.state.sort = SortSpec {
                    column: Some(column),
                    direction,
                };
                self.state.page = 1;
                self.refresh();
                true
            }
        }
    }

    /// Remove the active sort, restoring the post-filter input order.
    /// Resets to page 1.
    pub fn clear_sort(&mut self) {
        self.state.sort = SortSpec::default();
        self.state.page = 1;
        self.refresh();
    }

    /// Show or hide one column. Hiding the last visible column is rejected
    /// as a no-op. Visibility is a projection concern: the working sequence
    /// and the current page are untouched.
    pub fn set_visibility(&mut self, key: &str, visible: bool) -> bool {
        self.state.visibility.set_visible(&self.columns, key, visible)
    }

    /// Toggle every column: show all when any is hidden, otherwise hide all
    /// but the first declared column.
    pub fn toggle_all_columns(&mut self) {
        self.state.visibility.toggle_all(&self.columns);
    }

    /// Request a page. Out-of-range values are clamped when the slice is
    /// produced.
    pub fn set_page(&mut self, page: usize) {
        self.state.page = page;
    }

    /// Change the page size. Zero is rejected as a no-op. Resets to page 1
    /// on change.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            tracing::debug!("rejected page size of zero");
            return false;
        }
        if self.options.page_size != page_size {
            self.options.page_size = page_size;
            self.state.page = 1;
        }
        true
    }

    /// Replace the row snapshot.
    ///
    /// Filter selections whose values no longer occur anywhere in the new
    /// data are pruned, and the page resets to 1.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        let columns = &self.columns;
        let rows = &self.rows;
        self.state.filters.retain(|key, allowed| {
            if let Some(column) = columns.iter().find(|c| c.key == *key) {
                let live = filter::distinct_values(rows, column);
                allowed.retain(|v| live.iter().any(|l| l == v));
            } else {
                allowed.clear();
            }
            !allowed.is_empty()
        });
        self.state.page = 1;
        self.refresh();
        tracing::debug!(table_id = %self.id, rows = self.rows.len(), "row snapshot replaced");
    }

    /// The visible columns, in declaration order
    pub fn visible_columns(&self) -> Vec<&Column> {
        self.state.visibility.visible_columns(&self.columns)
    }

    /// The full working sequence: searched, filtered, and sorted, before
    /// pagination. Exports operate on this.
    pub fn working_rows(&self) -> Vec<&Row> {
        self.working.iter().map(|&ix| &self.rows[ix]).collect()
    }

    /// The rows of the current page
    pub fn visible_rows(&self) -> Vec<&Row> {
        let slice = pagination::paginate(&self.working, self.options.page_size, self.state.page);
        slice.page_rows.iter().map(|&ix| &self.rows[ix]).collect()
    }

    /// Rows surviving search and filter, before pagination
    pub fn total_row_count(&self) -> usize {
        self.working.len()
    }

    /// Page metadata for the current state
    pub fn page_info(&self) -> PageInfo {
        let slice = pagination::paginate(&self.working, self.options.page_size, self.state.page);
        PageInfo {
            page: slice.clamped_page,
            total_pages: slice.total_pages,
            page_size: self.options.page_size,
            total_rows: self.working.len(),
        }
    }

    /// Candidate filter values for one column, over the unfiltered row set.
    /// Unknown keys yield an empty list.
    pub fn distinct_values(&self, key: &str) -> Vec<String> {
        match self.columns.iter().find(|c| c.key == key) {
            Some(column) => filter::distinct_values(&self.rows, column),
            None => Vec::new(),
        }
    }

    /// The current visibility map
    pub fn visibility(&self) -> &ColumnVisibility {
        &self.state.visibility
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("id", &self.id)
            .field("columns", &self.columns.len())
            .field("rows", &self.rows.len())
            .field("working", &self.working.len())
            .finish()
    }
}

fn validate_columns(columns: &[Column]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for column in columns {
        if !seen.insert(column.key.as_str()) {
            return Err(TableError::DuplicateColumnKey(column.key.clone()));
        }
    }
    Ok(())
}
