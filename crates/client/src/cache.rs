//! Response caching.
//!
//! [`CachedCatalog`] keeps successful responses per resource and request parameters. Concurrent
//! identical misses share one request to the wrapped adapter. Errors are never cached and the
//! next identical request goes back to the wrapped adapter.

use std::{hash::Hash, time::Duration};

use async_trait::async_trait;
use aurum::{
    categories::Category, products::Product, query::ProductQuery, settings::Settings,
    stones::Stone,
};
use moka::future::Cache;
use tracing::debug;

use crate::{api::CatalogApi, config::ClientConfig, errors::ClientError};

/// A [`CatalogApi`] that caches the responses of another.
#[derive(Debug)]
pub struct CachedCatalog<A> {
    inner: A,
    products: Cache<ProductQuery, Vec<Product>>,
    product_by_slug: Cache<String, Option<Product>>,
    categories: Cache<(), Vec<Category>>,
    stones: Cache<(), Vec<Stone>>,
    settings: Cache<(), Settings>,
}

impl<A: CatalogApi> CachedCatalog<A> {
    /// Wrap an adapter using the capacity and lifetimes in `config`.
    pub fn new(inner: A, config: &ClientConfig) -> Self {
        let capacity = config.cache_capacity;
        let ttl = config.cache_ttl();

        Self {
            inner,
            products: build_cache(capacity, ttl),
            product_by_slug: build_cache(capacity, ttl),
            categories: build_cache(1, ttl),
            stones: build_cache(1, ttl),
            settings: build_cache(1, config.settings_ttl()),
        }
    }

    /// The wrapped adapter.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Drop every cached response.
    pub fn invalidate_all(&self) {
        self.products.invalidate_all();
        self.product_by_slug.invalidate_all();
        self.categories.invalidate_all();
        self.stones.invalidate_all();
        self.settings.invalidate_all();
    }
}

fn build_cache<K, V>(capacity: u64, ttl: Duration) -> Cache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Cache::builder()
        .max_capacity(capacity)
        .time_to_live(ttl)
        .build()
}

#[async_trait]
impl<A: CatalogApi> CatalogApi for CachedCatalog<A> {
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError> {
        if let Some(products) = self.products.get(query).await {
            debug!(?query, "products served from cache");

            return Ok(products);
        }

        self.products
            .try_get_with_by_ref(query, async {
                debug!(?query, "products cache miss");

                self.inner.fetch_products(query).await
            })
            .await
            .map_err(ClientError::unshare)
    }

    async fn fetch_product_by_slug(&self, slug: &str) -> Result<Option<Product>, ClientError> {
        if let Some(product) = self.product_by_slug.get(slug).await {
            debug!(slug, "product served from cache");

            return Ok(product);
        }

        self.product_by_slug
            .try_get_with_by_ref(slug, async {
                debug!(slug, "product cache miss");

                self.inner.fetch_product_by_slug(slug).await
            })
            .await
            .map_err(ClientError::unshare)
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError> {
        if let Some(categories) = self.categories.get(&()).await {
            debug!("categories served from cache");

            return Ok(categories);
        }

        self.categories
            .try_get_with((), async {
                debug!("categories cache miss");

                self.inner.fetch_categories().await
            })
            .await
            .map_err(ClientError::unshare)
    }

    async fn fetch_stones(&self) -> Result<Vec<Stone>, ClientError> {
        if let Some(stones) = self.stones.get(&()).await {
            debug!("stones served from cache");

            return Ok(stones);
        }

        self.stones
            .try_get_with((), async {
                debug!("stones cache miss");

                self.inner.fetch_stones().await
            })
            .await
            .map_err(ClientError::unshare)
    }

    async fn fetch_settings(&self) -> Result<Settings, ClientError> {
        if let Some(settings) = self.settings.get(&()).await {
            debug!("settings served from cache");

            return Ok(settings);
        }

        self.settings
            .try_get_with((), async {
                debug!("settings cache miss");

                self.inner.fetch_settings().await
            })
            .await
            .map_err(ClientError::unshare)
    }
}
