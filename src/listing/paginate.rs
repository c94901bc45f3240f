use std::num::NonZeroUsize;

use crate::listing::PageRequest;

/// One chunk of a partitioned sequence together with its position.
#[derive(Debug, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    /// Requested page clamped to `1..=total_pages` (`1` when there are no pages).
    pub current_page: usize,
    pub total_pages: usize,
}

/// Splits `items` into pages of `page_size` and returns the requested one.
///
/// Requests past the end select the last page.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, page: PageRequest) -> PageSlice<'_, T> {
    let total_pages = items.len().div_ceil(page_size.get());

    if total_pages == 0 {
        return PageSlice {
            items: &[],
            current_page: 1,
            total_pages: 0,
        };
    }

    let current_page = page.get().min(total_pages);
    let start = (current_page - 1) * page_size.get();
    let end = (start + page_size.get()).min(items.len());

    PageSlice {
        items: &items[start..end],
        current_page,
        total_pages,
    }
}
