//! Catalog API seam.

use async_trait::async_trait;
use aurum::{
    categories::Category, products::Product, query::ProductQuery, settings::Settings,
    stones::Stone,
};
use mockall::automock;

use crate::errors::ClientError;

/// Read access to the remote catalog.
///
/// Each call is independent; callers may issue them concurrently and in any order.
#[automock]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Retrieves products matching a query.
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError>;

    /// Retrieves a single product, or `None` if no product has the slug.
    async fn fetch_product_by_slug(&self, slug: &str) -> Result<Option<Product>, ClientError>;

    /// Retrieves all categories.
    async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError>;

    /// Retrieves all stones.
    async fn fetch_stones(&self) -> Result<Vec<Stone>, ClientError>;

    /// Retrieves storefront settings.
    async fn fetch_settings(&self) -> Result<Settings, ClientError>;
}
