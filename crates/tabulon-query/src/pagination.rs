//! Page slicing over an ordered, filtered row sequence
//!
//! Requesting a page beyond either end clamps instead of erroring, and the
//! page count never drops below one, so a host can always render a footer.

use serde::{Deserialize, Serialize};

/// Page metadata for footer display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Current page after clamping, 1-indexed
    pub page: usize,
    /// Total pages, at least 1
    pub total_pages: usize,
    /// Rows per page
    pub page_size: usize,
    /// Rows in the working sequence, before pagination
    pub total_rows: usize,
}

impl PageInfo {
    /// Human-readable summary, e.g. "25 records, page 2 of 3"
    pub fn status_text(&self) -> String {
        format!(
            "{} records, page {} of {}",
            self.total_rows, self.page, self.total_pages
        )
    }
}

/// One page of an ordered sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    /// The rows of the clamped page
    pub page_rows: &'a [T],
    /// Total pages, at least 1
    pub total_pages: usize,
    /// The page actually served, 1-indexed
    pub clamped_page: usize,
}

/// Total page count for a sequence length. Never less than 1, even for an
/// empty sequence.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    (len.saturating_add(page_size - 1) / page_size).max(1)
}

/// Slice one page out of an ordered sequence.
///
/// `page` is 1-indexed and clamped into `1..=total_pages`; a page size
/// below 1 is treated as 1.
pub fn paginate<T>(rows: &[T], page_size: usize, page: usize) -> PageSlice<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(rows.len(), page_size);
    let clamped_page = page.clamp(1, total_pages);
    let start = (clamped_page - 1) * page_size;
    let end = (start + page_size).min(rows.len());
    // An empty sequence still reports page 1 of 1 with no rows.
    let page_rows = if start >= rows.len() {
        &rows[0..0]
    } else {
        &rows[start..end]
    };
    PageSlice {
        page_rows,
        total_pages,
        clamped_page,
    }
}
