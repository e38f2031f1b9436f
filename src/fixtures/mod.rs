//! Fixtures
//!
//! Catalog snapshots: the products, categories, stones and settings of a storefront captured in
//! a single YAML or JSON document.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{categories::Category, products::Product, settings::Settings, stones::Stone};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is not one of `yml`, `yaml` or `json`
    #[error("Unsupported fixture format: {0}")]
    UnsupportedFormat(String),

    /// Two products share a slug
    #[error("Duplicate product slug: {0}")]
    DuplicateSlug(String),
}

/// A captured catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Products, in display order
    #[serde(default)]
    pub products: Vec<Product>,

    /// Categories
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Stones
    #[serde(default)]
    pub stones: Vec<Stone>,

    /// Storefront settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
}

impl CatalogSnapshot {
    /// Parse a YAML snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid snapshot or repeats a product slug.
    pub fn from_yaml_str(contents: &str) -> Result<Self, FixtureError> {
        let snapshot: Self = serde_norway::from_str(contents)?;

        snapshot.validated()
    }

    /// Parse a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid snapshot or repeats a product slug.
    pub fn from_json_str(contents: &str) -> Result<Self, FixtureError> {
        let snapshot: Self = serde_json::from_str(contents)?;

        snapshot.validated()
    }

    /// Load a snapshot file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or has an unsupported extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "yml" | "yaml" => Self::from_yaml_str(&fs::read_to_string(path)?),
            "json" => Self::from_json_str(&fs::read_to_string(path)?),
            _ => Err(FixtureError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Settings, or defaults when the snapshot has none.
    pub fn settings_or_default(&self) -> Settings {
        self.settings.clone().unwrap_or_default()
    }

    fn validated(self) -> Result<Self, FixtureError> {
        let mut slugs: Vec<&str> = self.products.iter().map(|p| p.slug.as_str()).collect();

        slugs.sort_unstable();

        if let Some(duplicate) = slugs.windows(2).find_map(|pair| match pair {
            [left, right] if left == right => Some(*left),
            _ => None,
        }) {
            return Err(FixtureError::DuplicateSlug(duplicate.to_string()));
        }

        Ok(self)
    }
}
