//! Similar Products
//!
//! Candidates sharing the reference product's subcategory rank ahead of those sharing only its
//! category. Ranking is a stable partition: candidates of equal relevance keep their input
//! order.

use crate::products::Product;

/// Number of similar products shown on a product page.
pub const DEFAULT_SIMILAR_LIMIT: usize = 8;

/// How a candidate relates to the reference product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Relevance {
    /// Shares the reference subcategory
    Subcategory,

    /// Shares only the reference category
    Category,
}

/// The attributes of a reference product used for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityReference<'a> {
    /// Reference product id, always excluded from results
    pub id: &'a str,

    /// Reference category id
    pub category: Option<&'a str>,

    /// Reference subcategory id
    pub subcategory: Option<&'a str>,
}

impl<'a> From<&'a Product> for SimilarityReference<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: &product.id,
            category: product.category_id(),
            subcategory: product.subcategory_id(),
        }
    }
}

impl SimilarityReference<'_> {
    /// Classify a candidate, or `None` if it is unrelated or is the reference itself.
    pub fn relevance(&self, candidate: &Product) -> Option<Relevance> {
        if candidate.id == self.id {
            return None;
        }

        if self.subcategory.is_some() && candidate.subcategory_id() == self.subcategory {
            return Some(Relevance::Subcategory);
        }

        if self.category.is_some() && candidate.category_id() == self.category {
            return Some(Relevance::Category);
        }

        None
    }
}

/// Rank candidates by similarity to a reference and keep the first `limit`.
pub fn rank_similar<'a>(
    reference: &SimilarityReference<'_>,
    candidates: &'a [Product],
    limit: usize,
) -> Vec<&'a Product> {
    if limit == 0 {
        return Vec::new();
    }

    let mut retained: Vec<(Relevance, &Product)> = candidates
        .iter()
        .filter_map(|candidate| {
            reference
                .relevance(candidate)
                .map(|relevance| (relevance, candidate))
        })
        .collect();

    // `sort_by_key` is stable, so equal-relevance candidates keep their input order.
    retained.sort_by_key(|(relevance, _)| *relevance);

    retained
        .into_iter()
        .take(limit)
        .map(|(_, product)| product)
        .collect()
}

/// Products similar to `reference`, most relevant first.
///
/// Returns an empty list when there is no reference product.
pub fn similar_to<'a>(
    reference: Option<&Product>,
    candidates: &'a [Product],
    limit: usize,
) -> Vec<&'a Product> {
    reference.map_or_else(Vec::new, |product| {
        rank_similar(&SimilarityReference::from(product), candidates, limit)
    })
}
