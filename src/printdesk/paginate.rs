//! # Paginator
//!
//! Slices a filtered view into pages of [`PAGE_SIZE`] records.
//!
//! `total_pages` is computed from the size of the whole inventory, not from the
//! filtered view the slice is taken from. With a status filter active the page
//! counter can therefore advertise pages that come back empty. Listings keep
//! this behavior; [`Page::filtered_pages`] gives the count a consistent pager
//! would use.
//!
//! Pages are 1-based. A page past the end yields no items; callers that take
//! user input should pass it through [`clamp_page`] first.

use serde::Serialize;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The requested 1-based page number.
    pub page: usize,
    /// `ceil(total_records / PAGE_SIZE)`.
    pub total_pages: usize,
    /// Size of the unfiltered inventory.
    pub total_records: usize,
    /// Size of the filtered view the items were sliced from.
    pub filtered_records: usize,
}

impl<T> Page<T> {
    /// Page count derived from the filtered view.
    pub fn filtered_pages(&self) -> usize {
        page_count(self.filtered_records)
    }

    /// 1-based `(first, last)` record numbers for the "showing X-Y of N" line.
    ///
    /// `last` is capped by the unfiltered total, matching the page counter.
    pub fn display_range(&self) -> (usize, usize) {
        let first = (self.page.max(1) - 1) * PAGE_SIZE + 1;
        let last = (self.page.max(1) * PAGE_SIZE).min(self.total_records);
        (first, last)
    }
}

pub fn page_count(records: usize) -> usize {
    records.div_ceil(PAGE_SIZE)
}

/// Keeps a requested page inside `1..=total_pages` (page 1 when there are none).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Takes page `page` out of `filtered`.
///
/// `total_records` is the unfiltered inventory size and only feeds the page
/// counter. Page 0 is treated like page 1.
pub fn paginate<T: Clone>(filtered: &[T], total_records: usize, page: usize) -> Page<T> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    let items = filtered
        .iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    Page {
        items,
        page,
        total_pages: page_count(total_records),
        total_records,
        filtered_records: filtered.len(),
    }
}
