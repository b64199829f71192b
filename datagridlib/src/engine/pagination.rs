//! Pagination window and page derivation.

use serde::{Deserialize, Serialize};

/// The (page index, page size) pair defining the visible slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Zero-based page index
    pub page_index: usize,
    /// Rows per page (always > 0)
    pub page_size: usize,
}

impl Pagination {
    /// Window at page 0.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Number of pages for `total` rows (0 when there are no rows).
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Index of the last valid page (0 when there are no rows).
    pub fn last_page(&self, total: usize) -> usize {
        self.page_count(total).saturating_sub(1)
    }

    /// Half-open bounds of the current page within `total` rows.
    ///
    /// Out-of-range indexes yield an empty range at `total`.
    pub fn bounds(&self, total: usize) -> (usize, usize) {
        let start = self.page_index.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        (start, end)
    }

    /// Bring the index back inside `[0, last_page]`.
    pub fn clamp(&mut self, total: usize) {
        self.page_index = self.page_index.min(self.last_page(total));
    }

    /// Figures a pagination control needs.
    pub fn info(&self, total: usize) -> PageInfo {
        let (start, end) = self.bounds(total);
        let page_count = self.page_count(total);
        PageInfo {
            page_index: self.page_index,
            page_size: self.page_size,
            page_count,
            total_rows: total,
            showing_from: if end > start { start + 1 } else { 0 },
            showing_to: if end > start { end } else { 0 },
            can_previous: self.page_index > 0,
            can_next: self.page_index.saturating_add(1) < page_count,
        }
    }
}

/// Derived pagination figures for the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Zero-based page index
    pub page_index: usize,
    /// Rows per page
    pub page_size: usize,
    /// Total number of pages
    pub page_count: usize,
    /// Total rows in the dataset
    pub total_rows: usize,
    /// 1-based position of the first visible row (0 when the page is empty)
    pub showing_from: usize,
    /// 1-based position of the last visible row (0 when the page is empty)
    pub showing_to: usize,
    /// A previous page exists
    pub can_previous: bool,
    /// A next page exists
    pub can_next: bool,
}
