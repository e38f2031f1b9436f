//! Product Filters
//!
//! A [`FilterSelection`] holds at most one value per dimension. Unset dimensions match every
//! product; set dimensions are combined conjunctively.

use crate::{
    palette::{Carat, Color},
    products::Product,
};

/// The filter values selected for a product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    /// Category id
    pub category: Option<String>,

    /// Metal color
    pub color: Option<Color>,

    /// Gold purity grade
    pub carat: Option<Carat>,

    /// Stone id
    pub stone: Option<String>,
}

impl FilterSelection {
    /// A selection with every dimension unset.
    pub fn none() -> Self {
        Self::default()
    }

    /// Restrict to a category id.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to a color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Restrict to a carat grade.
    #[must_use]
    pub fn with_carat(mut self, carat: Carat) -> Self {
        self.carat = Some(carat);
        self
    }

    /// Restrict to a stone id.
    #[must_use]
    pub fn with_stone(mut self, stone: impl Into<String>) -> Self {
        self.stone = Some(stone.into());
        self
    }

    /// Whether no dimension is set.
    pub fn is_empty(&self) -> bool {
        active(self.category.as_deref()).is_none()
            && self.color.is_none()
            && self.carat.is_none()
            && active(self.stone.as_deref()).is_none()
    }

    /// Whether a product passes every set dimension.
    pub fn matches(&self, product: &Product) -> bool {
        matches(product, self)
    }
}

/// Decide whether a product is included by a selection.
///
/// Products missing a filtered attribute never match that dimension.
pub fn matches(product: &Product, selection: &FilterSelection) -> bool {
    active(selection.category.as_deref())
        .is_none_or(|category| product.category_id() == Some(category))
        && selection
            .color
            .is_none_or(|color| product.has_color(color.as_str()))
        && selection
            .carat
            .is_none_or(|carat| product.carat.as_deref() == Some(carat.as_str()))
        && active(selection.stone.as_deref())
            .is_none_or(|stone| product.stone_ids().any(|id| id == stone))
}

/// Filter products by a selection, preserving their order.
pub fn filter_products<'a>(
    products: &'a [Product],
    selection: &FilterSelection,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| matches(product, selection))
        .collect()
}

/// An empty id is the same as no selection.
fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
