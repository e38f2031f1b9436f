//! Pagination

use std::num::NonZeroUsize;

/// Number of products shown per listing page.
pub const PAGE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(5);

/// One page of an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, in collection order
    pub visible: &'a [T],

    /// Total number of pages (zero for an empty collection)
    pub total_pages: usize,

    /// The requested page number (1-based)
    pub page: usize,
}

impl<T> Page<'_, T> {
    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}

/// Window an ordered collection for display.
///
/// Pages are 1-based; page `0` is treated as page `1`. A page past the end yields an empty slice.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, page_number: usize) -> Page<'_, T> {
    let page = page_number.max(1);
    let size = page_size.get();
    let total_pages = items.len().div_ceil(size);

    let start = (page - 1).saturating_mul(size);
    let end = start.saturating_add(size).min(items.len());

    Page {
        visible: items.get(start..end).unwrap_or_default(),
        total_pages,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, PAGE_SIZE, 1);

        assert_eq!(page.total_pages, 0);
        assert!(page.visible.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items = numbers(14);
        let page = paginate(&items, PAGE_SIZE, 3);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.visible, &[13, 14]);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn first_page_is_full() {
        let items = numbers(14);
        let page = paginate(&items, PAGE_SIZE, 1);

        assert_eq!(page.visible, &[1, 2, 3, 4, 5, 6]);
        assert!(page.has_next());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = numbers(5);
        let page = paginate(&items, PAGE_SIZE, 4);

        assert_eq!(page.total_pages, 1);
        assert!(page.visible.is_empty());
    }

    #[test]
    fn page_zero_is_page_one() {
        let items = numbers(8);

        assert_eq!(paginate(&items, PAGE_SIZE, 0), paginate(&items, PAGE_SIZE, 1));
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items = numbers(12);

        assert_eq!(paginate(&items, PAGE_SIZE, 1).total_pages, 2);
    }

    #[test]
    fn page_size_constant_is_six() {
        assert_eq!(PAGE_SIZE.get(), 6);
    }
}
