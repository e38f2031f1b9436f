//! Product Queries
//!
//! The parameters accepted by the catalog's product listing endpoint. Queries are hashable so
//! the fetch layer can cache responses per parameter set.

use crate::{
    filters::FilterSelection,
    palette::{Carat, Color},
    products::Product,
};

/// Server-side product listing parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductQuery {
    /// Category id
    pub category: Option<String>,

    /// Subcategory id
    pub subcategory: Option<String>,

    /// Metal color
    pub color: Option<Color>,

    /// Gold purity grade
    pub carat: Option<Carat>,

    /// Stone id
    pub stone: Option<String>,

    /// Featured flag
    pub featured: Option<bool>,

    /// Free-text search
    pub search: Option<String>,
}

impl ProductQuery {
    /// Every product.
    pub fn all() -> Self {
        Self::default()
    }

    /// Featured products only.
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
            ..Self::default()
        }
    }

    /// Products in a category.
    pub fn in_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Restrict to a free-text search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Whether the query carries no parameters.
    pub fn is_empty(&self) -> bool {
        self.to_params().is_empty()
    }

    /// The query string parameters, omitting unset and blank values.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("category", self.category.as_deref()),
            ("subcategory", self.subcategory.as_deref()),
            ("color", self.color.map(Color::as_str)),
            ("carat", self.carat.map(Carat::as_str)),
            ("stone", self.stone.as_deref()),
        ];

        let mut params: Vec<(&'static str, String)> = text
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .filter(|value| !value.is_empty())
                    .map(|value| (key, value.to_string()))
            })
            .collect();

        if let Some(featured) = self.featured {
            params.push(("featured", featured.to_string()));
        }

        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            params.push(("search", search.to_string()));
        }

        params
    }

    /// Evaluate the query locally against a product.
    ///
    /// Search matches case-insensitively against the title and description.
    pub fn matches(&self, product: &Product) -> bool {
        let selection = FilterSelection::from(self);

        selection.matches(product)
            && self
                .subcategory
                .as_deref()
                .filter(|id| !id.is_empty())
                .is_none_or(|id| product.subcategory_id() == Some(id))
            && self
                .featured
                .is_none_or(|featured| product.featured == featured)
            && self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|search| !search.is_empty())
                .is_none_or(|search| matches_search(product, search))
    }
}

impl From<&FilterSelection> for ProductQuery {
    fn from(selection: &FilterSelection) -> Self {
        Self {
            category: selection.category.clone(),
            color: selection.color,
            carat: selection.carat,
            stone: selection.stone.clone(),
            ..Self::default()
        }
    }
}

impl From<&ProductQuery> for FilterSelection {
    fn from(query: &ProductQuery) -> Self {
        Self {
            category: query.category.clone(),
            color: query.color,
            carat: query.carat,
            stone: query.stone.clone(),
        }
    }
}

fn matches_search(product: &Product, search: &str) -> bool {
    let needle = search.to_lowercase();

    product.title.to_lowercase().contains(&needle)
        || product
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(&needle))
}
