//! Offline catalog backed by a [`CatalogSnapshot`].

use std::path::Path;

use async_trait::async_trait;
use aurum::{
    categories::Category, fixtures::CatalogSnapshot, products::Product, query::ProductQuery,
    settings::Settings, stones::Stone,
};
use tracing::info;

use crate::{api::CatalogApi, errors::ClientError};

/// A [`CatalogApi`] that answers from an in-memory snapshot.
///
/// Product queries are evaluated locally with [`ProductQuery::matches`].
#[derive(Debug, Clone)]
pub struct SnapshotCatalog {
    snapshot: CatalogSnapshot,
}

impl SnapshotCatalog {
    /// Serve the given snapshot.
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let snapshot = CatalogSnapshot::from_path(path)?;

        info!(
            path = %path.display(),
            products = snapshot.products.len(),
            categories = snapshot.categories.len(),
            "loaded catalog snapshot"
        );

        Ok(Self::new(snapshot))
    }

    /// The underlying snapshot.
    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl CatalogApi for SnapshotCatalog {
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError> {
        Ok(self
            .snapshot
            .products
            .iter()
            .filter(|product| query.matches(product))
            .cloned()
            .collect())
    }

    async fn fetch_product_by_slug(&self, slug: &str) -> Result<Option<Product>, ClientError> {
        Ok(Product::find_by_slug(&self.snapshot.products, slug).cloned())
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError> {
        Ok(self.snapshot.categories.clone())
    }

    async fn fetch_stones(&self) -> Result<Vec<Stone>, ClientError> {
        Ok(self.snapshot.stones.clone())
    }

    async fn fetch_settings(&self) -> Result<Settings, ClientError> {
        Ok(self.snapshot.settings_or_default())
    }
}
