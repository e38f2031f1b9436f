//! Categories

use serde::{Deserialize, Serialize};

/// Category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Category name
    pub name: String,

    /// URL-safe unique identifier
    pub slug: String,

    /// Category description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category banner image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Category {
    /// Create a category with no description or image.
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            image: None,
        }
    }

    /// Find a category by slug.
    pub fn find_by_slug<'a>(categories: &'a [Self], slug: &str) -> Option<&'a Self> {
        categories.iter().find(|category| category.slug == slug)
    }
}
