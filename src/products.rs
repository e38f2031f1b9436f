//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::references::{Reference, null_as_default, resolve_id};

/// Placeholder shown when a product detail value is unknown.
pub const NOT_AVAILABLE: &str = "N/A";

/// Product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Product title
    pub title: String,

    /// URL-safe unique identifier
    pub slug: String,

    /// Product price
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,

    /// Product description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Product category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Reference>,

    /// Product subcategory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<Reference>,

    /// Metal colors the product is available in
    #[serde(default, deserialize_with = "null_as_default")]
    pub colors: SmallVec<[String; 4]>,

    /// Gold purity grade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carat: Option<String>,

    /// Attached stones
    #[serde(default, deserialize_with = "null_as_default")]
    pub stones: Vec<Reference>,

    /// Promoted product flag
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,

    /// Product photos
    #[serde(default, alias = "images", deserialize_with = "null_as_default")]
    pub photos: Vec<Photo>,
}

/// Product photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Image URL
    pub url: String,
}

impl Product {
    /// Create a product with the given identity and no classification attributes.
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            price: Decimal::ZERO,
            description: None,
            category: None,
            subcategory: None,
            colors: SmallVec::new(),
            carat: None,
            stones: Vec::new(),
            featured: false,
            photos: Vec::new(),
        }
    }

    /// The product's category id.
    pub fn category_id(&self) -> Option<&str> {
        resolve_id(self.category.as_ref())
    }

    /// The product's subcategory id.
    pub fn subcategory_id(&self) -> Option<&str> {
        resolve_id(self.subcategory.as_ref())
    }

    /// The ids of the product's stones, skipping any that cannot be resolved.
    pub fn stone_ids(&self) -> impl Iterator<Item = &str> {
        self.stones.iter().filter_map(|stone| resolve_id(Some(stone)))
    }

    /// Whether the product is available in the given color.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|candidate| candidate == color)
    }

    /// The category display name, or [`NOT_AVAILABLE`].
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .and_then(Reference::name)
            .unwrap_or(NOT_AVAILABLE)
    }

    /// Comma-separated stone names, or [`NOT_AVAILABLE`] when the product has none.
    ///
    /// Bare stone references are shown by id.
    pub fn stone_names(&self) -> String {
        let names: Vec<&str> = self
            .stones
            .iter()
            .filter_map(|stone| stone.name().or_else(|| stone.resolve()))
            .collect();

        if names.is_empty() {
            return NOT_AVAILABLE.to_string();
        }

        names.join(", ")
    }

    /// The first photo, used as the listing thumbnail.
    pub fn primary_photo(&self) -> Option<&Photo> {
        self.photos.first()
    }

    /// Find a product by slug.
    pub fn find_by_slug<'a>(products: &'a [Self], slug: &str) -> Option<&'a Self> {
        products.iter().find(|product| product.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_populated_api_record() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{
                "_id": "p1",
                "title": "Solitaire Ring",
                "slug": "solitaire-ring",
                "price": 45999,
                "category": {"_id": "c1", "name": "Rings", "slug": "rings"},
                "subcategory": "s1",
                "colors": ["Yellow", "Rose"],
                "carat": "18k",
                "stones": [{"_id": "st1", "name": "Diamond"}, "st2"],
                "featured": true,
                "photos": [{"url": "https://cdn.example.com/p1.jpg"}]
            }"#,
        )?;

        assert_eq!(product.category_id(), Some("c1"));
        assert_eq!(product.subcategory_id(), Some("s1"));
        assert_eq!(product.stone_ids().collect::<Vec<_>>(), vec!["st1", "st2"]);
        assert_eq!(product.price, Decimal::from(45_999));
        assert!(product.has_color("Rose"));
        assert!(product.featured);
        assert_eq!(
            product.primary_photo().map(|photo| photo.url.as_str()),
            Some("https://cdn.example.com/p1.jpg")
        );

        Ok(())
    }

    #[test]
    fn missing_and_null_fields_degrade_to_empty() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{"id": "p2", "title": "Chain", "slug": "chain", "colors": null, "stones": null}"#,
        )?;

        assert!(product.colors.is_empty());
        assert!(product.stones.is_empty());
        assert_eq!(product.category_id(), None);
        assert_eq!(product.carat, None);
        assert!(!product.featured);

        Ok(())
    }

    #[test]
    fn images_alias_populates_photos() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{"_id": "p3", "title": "Bangle", "slug": "bangle", "images": [{"url": "a.jpg"}]}"#,
        )?;

        assert_eq!(product.photos.len(), 1);

        Ok(())
    }

    #[test]
    fn detail_labels_fall_back_to_not_available() {
        let product = Product::new("p4", "Pendant", "pendant");

        assert_eq!(product.category_name(), NOT_AVAILABLE);
        assert_eq!(product.stone_names(), NOT_AVAILABLE);
    }

    #[test]
    fn stone_names_use_embedded_names_then_ids() {
        let mut product = Product::new("p5", "Earrings", "earrings");
        product.stones = vec![Reference::embedded("st1", "Ruby"), Reference::id("st9")];

        assert_eq!(product.stone_names(), "Ruby, st9");
    }

    #[test]
    fn find_by_slug_returns_matching_product() {
        let products = vec![
            Product::new("p1", "Ring", "ring"),
            Product::new("p2", "Necklace", "necklace"),
        ];

        assert_eq!(
            Product::find_by_slug(&products, "necklace").map(|p| p.id.as_str()),
            Some("p2")
        );
        assert!(Product::find_by_slug(&products, "anklet").is_none());
    }
}
