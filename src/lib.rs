//! Aurum
//!
//! Aurum is the catalog core of a jewelry storefront: product filtering, listing pagination,
//! similar-product ranking and contact links over catalog records fetched from a remote API.

pub mod categories;
pub mod contact;
pub mod filters;
pub mod fixtures;
pub mod listing;
pub mod pagination;
pub mod palette;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod query;
pub mod references;
pub mod settings;
pub mod similarity;
pub mod stones;
pub mod urls;
