//! Page arithmetic shared by the table state and its controls.

use std::ops::{Range, RangeInclusive};

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of page-number buttons shown at once.
pub const PAGE_WINDOW: usize = 5;

/// `ceil(count / page_size)`; zero when there is nothing to show.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamps a requested 1-based page into `[1, max(1, total_pages)]`.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if requested < 1 {
        1
    } else {
        usize::try_from(requested).map_or(last, |page| page.min(last))
    }
}

/// Page numbers to offer as buttons around `current`.
///
/// All pages when there are at most [`PAGE_WINDOW`]; otherwise the first
/// five near the start, the last five near the end, and `current ± 2` in
/// between.
pub fn page_window(current: usize, total_pages: usize) -> RangeInclusive<usize> {
    if total_pages <= PAGE_WINDOW {
        return 1..=total_pages;
    }
    let half = PAGE_WINDOW / 2;
    if current <= half + 1 {
        1..=PAGE_WINDOW
    } else if current + half >= total_pages {
        (total_pages - PAGE_WINDOW + 1)..=total_pages
    } else {
        (current - half)..=(current + half)
    }
}

/// Index range of `page` within a list of `count` items.
pub fn page_bounds(page: usize, page_size: usize, count: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(count);
    let end = start.saturating_add(page_size).min(count);
    start..end
}
