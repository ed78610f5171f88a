//! Page slicing and the "Showing a to b of n" footer.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// Number of pages needed for `len` rows. Zero rows or a zero page size
/// give zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Index range of a 1-indexed page, clipped to `len`.
///
/// A page past the end yields an empty range rather than being clamped.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// Returns the rows of a 1-indexed page.
///
/// # Example
///
/// ```
/// use rosterview_lib::view::paginate;
///
/// let rows: Vec<u32> = (1..=12).collect();
/// assert_eq!(paginate(&rows, 1, 10), &rows[..10]);
/// assert_eq!(paginate(&rows, 2, 10), &[11, 12]);
/// assert!(paginate(&rows, 3, 10).is_empty());
/// ```
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    &rows[page_range(rows.len(), page, page_size)]
}

/// Footer numbers for the current page.
///
/// `start` is 1-based and `end` is inclusive. On a page past the end,
/// `start` exceeds `end`, just as the page itself shows no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl PageSummary {
    /// Computes the summary for a 1-indexed page.
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        Self {
            start: page.saturating_sub(1).saturating_mul(page_size).saturating_add(1),
            end: page.saturating_mul(page_size).min(total),
            total,
        }
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} to {} of {}", self.start, self.end, self.total)
    }
}
