//! Page arithmetic

use std::ops::Range;

use crate::models::view::PageControls;

/// Page window over a filtered result of `total` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total: usize,
    pub per_page: usize,
    /// Clamped into `1..=max(page_count, 1)`
    pub page: usize,
    pub page_count: usize,
    pub first_index: usize,
    pub last_index: usize,
}

impl Pagination {
    pub fn new(total: usize, per_page: usize, requested_page: usize) -> Self {
        let per_page = per_page.max(1);
        let page_count = total.div_ceil(per_page);
        let page = requested_page.clamp(1, page_count.max(1));
        let last_index = page * per_page;

        Self {
            total,
            per_page,
            page,
            page_count,
            first_index: last_index - per_page,
            last_index,
        }
    }

    /// Slice bounds into the filtered rows
    pub fn slice(&self) -> Range<usize> {
        self.first_index.min(self.total)..self.last_index.min(self.total)
    }

    /// `first-last of total`, 1-based; `0-0 of 0` when nothing matches
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return format!("0-0 of {}", self.total);
        }
        format!(
            "{}-{} of {}",
            self.first_index + 1,
            self.last_index.min(self.total),
            self.total
        )
    }

    pub fn controls(&self) -> PageControls {
        let has_before = self.page > 1;
        let has_after = self.page_count > 0 && self.page < self.page_count;
        PageControls {
            first: has_before,
            previous: has_before,
            next: has_after,
            last: has_after,
        }
    }
}
