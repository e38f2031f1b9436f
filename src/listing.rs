//! Listing Sessions
//!
//! A [`ListingSession`] owns the filter selection and page cursor of one product listing view.
//! Changes that require the view to react are reported as [`SessionEffect`]s instead of being
//! coupled to any UI framework: changing a filter dimension resets the cursor to page 1 and
//! reports [`SessionEffect::ResetPage`].

use std::num::NonZeroUsize;

use crate::{
    filters::{FilterSelection, filter_products},
    pagination::{PAGE_SIZE, paginate},
    palette::{Carat, Color},
    products::Product,
};

/// A side effect requested by a session change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    /// The filtered collection changed; the cursor was moved back to page 1.
    ResetPage,

    /// The page changed; the view should scroll back to the top.
    ScrollToTop,
}

/// Filter selection and page cursor for a product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSession {
    selection: FilterSelection,
    pinned_category: Option<String>,
    page: usize,
    page_size: NonZeroUsize,
}

/// The visible part of a filtered listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage<'a> {
    /// Products on the current page
    pub products: Vec<&'a Product>,

    /// Number of products matching the selection
    pub total_matches: usize,

    /// Number of pages
    pub total_pages: usize,

    /// Current page (1-based)
    pub page: usize,
}

impl ListingPage<'_> {
    /// Whether the selection matched nothing.
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }
}

impl Default for ListingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingSession {
    /// A session over the whole catalog, on page 1 with nothing selected.
    pub fn new() -> Self {
        Self {
            selection: FilterSelection::none(),
            pinned_category: None,
            page: 1,
            page_size: PAGE_SIZE,
        }
    }

    /// A session for a category page. The category survives [`ListingSession::reset`].
    pub fn for_category(category: impl Into<String>) -> Self {
        let category = category.into();

        Self {
            selection: FilterSelection::none().with_category(category.clone()),
            pinned_category: Some(category),
            ..Self::new()
        }
    }

    /// Use a different page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    /// The current selection.
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The current page (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Select a category, or clear it with `None`.
    pub fn set_category(&mut self, category: Option<String>) -> Option<SessionEffect> {
        let changed = replace_if_changed(&mut self.selection.category, category);

        self.reset_page_if(changed)
    }

    /// Select a color, or clear it with `None`.
    pub fn set_color(&mut self, color: Option<Color>) -> Option<SessionEffect> {
        let changed = replace_if_changed(&mut self.selection.color, color);

        self.reset_page_if(changed)
    }

    /// Select a carat grade, or clear it with `None`.
    pub fn set_carat(&mut self, carat: Option<Carat>) -> Option<SessionEffect> {
        let changed = replace_if_changed(&mut self.selection.carat, carat);

        self.reset_page_if(changed)
    }

    /// Select a stone, or clear it with `None`.
    pub fn set_stone(&mut self, stone: Option<String>) -> Option<SessionEffect> {
        let changed = replace_if_changed(&mut self.selection.stone, stone);

        self.reset_page_if(changed)
    }

    /// Move to a page. Page `0` is treated as page `1`.
    pub fn set_page(&mut self, page: usize) -> SessionEffect {
        self.page = page.max(1);

        SessionEffect::ScrollToTop
    }

    /// Clear the selection (keeping a pinned category) and return to page 1.
    pub fn reset(&mut self) -> SessionEffect {
        self.selection = FilterSelection {
            category: self.pinned_category.clone(),
            ..FilterSelection::none()
        };
        self.page = 1;

        SessionEffect::ResetPage
    }

    /// Filter and paginate `products` with the current selection and page.
    pub fn view<'a>(&self, products: &'a [Product]) -> ListingPage<'a> {
        let filtered = filter_products(products, &self.selection);
        let page = paginate(&filtered, self.page_size, self.page);

        ListingPage {
            products: page.visible.to_vec(),
            total_matches: filtered.len(),
            total_pages: page.total_pages,
            page: page.page,
        }
    }

    fn reset_page_if(&mut self, changed: bool) -> Option<SessionEffect> {
        if !changed {
            return None;
        }

        self.page = 1;

        Some(SessionEffect::ResetPage)
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }

    *slot = value;

    true
}

#[cfg(test)]
mod tests {
    use crate::references::Reference;

    use super::*;

    fn catalog(n: usize) -> Vec<Product> {
        (1..=n)
            .map(|i| {
                let mut product =
                    Product::new(format!("p{i}"), format!("Item {i}"), format!("item-{i}"));
                product.category = Some(Reference::id(if i % 2 == 0 { "even" } else { "odd" }));
                product.colors = if i % 3 == 0 {
                    ["Rose"].iter().map(ToString::to_string).collect()
                } else {
                    ["Yellow"].iter().map(ToString::to_string).collect()
                };
                product
            })
            .collect()
    }

    #[test]
    fn new_session_shows_first_page_of_everything() {
        let products = catalog(14);
        let view = ListingSession::new().view(&products);

        assert_eq!(view.total_matches, 14);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page, 1);
        assert_eq!(view.products.len(), 6);
    }

    #[test]
    fn changing_a_filter_resets_the_page() {
        let mut session = ListingSession::new();

        session.set_page(3);

        assert_eq!(session.set_color(Some(Color::Rose)), Some(SessionEffect::ResetPage));
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn setting_the_same_value_is_not_a_change() {
        let mut session = ListingSession::new();

        session.set_carat(Some(Carat::K14));
        session.set_page(2);

        assert_eq!(session.set_carat(Some(Carat::K14)), None);
        assert_eq!(session.page(), 2);
    }

    #[test]
    fn every_dimension_resets_the_page() {
        let mut session = ListingSession::new();

        session.set_page(2);
        assert!(session.set_category(Some("odd".to_string())).is_some());

        session.set_page(2);
        assert!(session.set_stone(Some("st1".to_string())).is_some());

        session.set_page(2);
        assert!(session.set_stone(None).is_some());

        assert_eq!(session.page(), 1);
    }

    #[test]
    fn page_change_requests_scroll_to_top() {
        let mut session = ListingSession::new();

        assert_eq!(session.set_page(2), SessionEffect::ScrollToTop);
        assert_eq!(session.page(), 2);
        assert_eq!(session.set_page(0), SessionEffect::ScrollToTop);
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn unmatched_color_empties_and_reset_restores() {
        let products = catalog(5);
        let mut session = ListingSession::new();

        session.set_color(Some(Color::White));

        assert!(session.view(&products).is_empty());

        assert_eq!(session.reset(), SessionEffect::ResetPage);
        assert_eq!(session.view(&products).total_matches, 5);
    }

    #[test]
    fn category_session_keeps_category_after_reset() {
        let products = catalog(10);
        let mut session = ListingSession::for_category("even");

        session.set_color(Some(Color::Rose));

        assert_eq!(session.view(&products).total_matches, 1);

        session.reset();

        assert_eq!(session.selection().category.as_deref(), Some("even"));
        assert_eq!(session.view(&products).total_matches, 5);
    }

    #[test]
    fn custom_page_size_is_respected() {
        let products = catalog(10);
        let session = ListingSession::new().with_page_size(NonZeroUsize::MIN.saturating_add(3));

        assert_eq!(session.view(&products).total_pages, 3);
    }
}
