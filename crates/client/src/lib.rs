//! Catalog API adapters, request caching and storefront page loaders.

pub mod api;
pub mod cache;
pub mod config;
pub mod errors;
pub mod http;
pub mod snapshot;
pub mod storefront;

pub use api::{CatalogApi, MockCatalogApi};
pub use cache::CachedCatalog;
pub use config::ClientConfig;
pub use errors::ClientError;
pub use http::HttpCatalog;
pub use snapshot::SnapshotCatalog;
pub use storefront::Storefront;
