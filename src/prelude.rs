//! Aurum prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    categories::Category,
    contact::{inquiry_message, whatsapp_link},
    filters::{FilterSelection, filter_products, matches},
    fixtures::{CatalogSnapshot, FixtureError},
    listing::{ListingPage, ListingSession, SessionEffect},
    pagination::{PAGE_SIZE, Page, paginate},
    palette::{Carat, Color, ParseCaratError, ParseColorError},
    pricing::display_price,
    products::{NOT_AVAILABLE, Photo, Product},
    query::ProductQuery,
    references::{EmbeddedReference, Reference, resolve_id},
    settings::{Settings, Showroom},
    similarity::{DEFAULT_SIMILAR_LIMIT, Relevance, SimilarityReference, rank_similar, similar_to},
    stones::Stone,
};
