//! Storefront page loaders.
//!
//! Each loader fetches the resources a page needs concurrently and fails as soon as any of them
//! fails. Dropping a loader future drops its in-flight requests.

use aurum::{
    categories::Category,
    listing::{ListingPage, ListingSession},
    products::Product,
    query::ProductQuery,
    settings::{Settings, Showroom},
    similarity::similar_to,
    stones::Stone,
};
use tracing::{debug, warn};

use crate::{api::CatalogApi, errors::ClientError};

/// Data for the all-products listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingData {
    /// Every product, in catalog order
    pub products: Vec<Product>,

    /// Stones offered as filter options
    pub stones: Vec<Stone>,
}

impl ListingData {
    /// Filter and paginate the products with a session.
    pub fn view(&self, session: &ListingSession) -> ListingPage<'_> {
        session.view(&self.products)
    }
}

/// Data for a category page.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPage {
    /// The category
    pub category: Category,

    /// Every product; [`CategoryPage::session`] restricts the view to the category
    pub products: Vec<Product>,

    /// Stones offered as filter options
    pub stones: Vec<Stone>,
}

impl CategoryPage {
    /// A listing session pinned to this category.
    pub fn session(&self) -> ListingSession {
        ListingSession::for_category(self.category.id.clone())
    }

    /// Filter and paginate the products with a session.
    pub fn view(&self, session: &ListingSession) -> ListingPage<'_> {
        session.view(&self.products)
    }
}

/// Data for a product detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// The product
    pub product: Product,

    /// Related products, most relevant first
    pub similar: Vec<Product>,

    /// Inquiry link about the product
    pub contact_link: String,
}

/// Data for the contact page.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactPage {
    /// Inquiry link
    pub contact_link: String,

    /// Showrooms, empty when none are configured or the list is malformed
    pub showrooms: Vec<Showroom>,
}

/// Page loaders over a [`CatalogApi`].
#[derive(Debug, Clone)]
pub struct Storefront<A> {
    api: A,
}

impl<A: CatalogApi> Storefront<A> {
    /// Load pages through `api`.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// The underlying API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Load the all-products listing.
    ///
    /// # Errors
    ///
    /// Returns an error if products or stones cannot be fetched.
    pub async fn listing(&self) -> Result<ListingData, ClientError> {
        let everything = ProductQuery::all();
        let (products, stones) = tokio::try_join!(
            self.api.fetch_products(&everything),
            self.api.fetch_stones(),
        )?;

        Ok(ListingData { products, stones })
    }

    /// Load a category page, or `None` if no category has the slug.
    ///
    /// # Errors
    ///
    /// Returns an error if categories, products or stones cannot be fetched.
    pub async fn category_page(&self, slug: &str) -> Result<Option<CategoryPage>, ClientError> {
        let everything = ProductQuery::all();
        let (categories, products, stones) = tokio::try_join!(
            self.api.fetch_categories(),
            self.api.fetch_products(&everything),
            self.api.fetch_stones(),
        )?;

        let Some(category) = Category::find_by_slug(&categories, slug).cloned() else {
            debug!(slug, "category not found");

            return Ok(None);
        };

        Ok(Some(CategoryPage {
            category,
            products,
            stones,
        }))
    }

    /// Load a product page with up to `similar_limit` related products, or `None` if no product
    /// has the slug.
    ///
    /// The product is looked up in the full catalog, which the similarity ranking needs anyway.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or settings cannot be fetched.
    pub async fn product_page(
        &self,
        slug: &str,
        similar_limit: usize,
    ) -> Result<Option<ProductPage>, ClientError> {
        let everything = ProductQuery::all();
        let (catalog, settings) = tokio::try_join!(
            self.api.fetch_products(&everything),
            self.api.fetch_settings(),
        )?;

        let Some(product) = Product::find_by_slug(&catalog, slug).cloned() else {
            debug!(slug, "product not found");

            return Ok(None);
        };

        let similar = similar_to(Some(&product), &catalog, similar_limit)
            .into_iter()
            .cloned()
            .collect();
        let contact_link = settings.contact_link(Some(&product.title));

        Ok(Some(ProductPage {
            product,
            similar,
            contact_link,
        }))
    }

    /// Load up to `limit` featured products.
    ///
    /// # Errors
    ///
    /// Returns an error if products cannot be fetched.
    pub async fn featured(&self, limit: usize) -> Result<Vec<Product>, ClientError> {
        let mut products = self.api.fetch_products(&ProductQuery::featured()).await?;

        products.truncate(limit);

        Ok(products)
    }

    /// Load the contact page, with an inquiry link about `product_title` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be fetched.
    pub async fn contact(&self, product_title: Option<&str>) -> Result<ContactPage, ClientError> {
        let settings = self.api.fetch_settings().await?;

        Ok(contact_page(&settings, product_title))
    }
}

fn contact_page(settings: &Settings, product_title: Option<&str>) -> ContactPage {
    let showrooms = settings.decode_showrooms().unwrap_or_else(|error| {
        warn!(%error, "ignoring malformed showroom list");

        Vec::new()
    });

    ContactPage {
        contact_link: settings.contact_link(product_title),
        showrooms,
    }
}

#[cfg(test)]
mod tests {
    use aurum::{contact::GENERIC_INQUIRY, references::Reference, urls::encode_component};
    use serde_json::Value;
    use testresult::TestResult;

    use crate::api::MockCatalogApi;

    use super::*;

    fn product(id: &str, category: &str, subcategory: Option<&str>) -> Product {
        let mut product = Product::new(id, format!("Product {id}"), format!("product-{id}"));
        product.category = Some(Reference::embedded(category, "Rings"));
        product.subcategory = subcategory.map(Reference::id);
        product
    }

    fn settings() -> Settings {
        Settings {
            whatsapp: Some("919876543210".to_string()),
            showrooms: None,
        }
    }

    #[tokio::test]
    async fn listing_fetches_products_and_stones() -> TestResult {
        let mut api = MockCatalogApi::new();

        api.expect_fetch_products()
            .withf(|query| query.is_empty())
            .times(1)
            .returning(|_| Ok(vec![product("1", "c1", None)]));
        api.expect_fetch_stones()
            .times(1)
            .returning(|| Ok(vec![Stone::new("st1", "Ruby")]));

        let listing = Storefront::new(api).listing().await?;

        assert_eq!(listing.products.len(), 1);
        assert_eq!(listing.stones.len(), 1);
        assert_eq!(listing.view(&ListingSession::new()).total_matches, 1);

        Ok(())
    }

    #[tokio::test]
    async fn listing_fails_when_any_fetch_fails() {
        let mut api = MockCatalogApi::new();

        api.expect_fetch_products().returning(|_| Ok(Vec::new()));
        api.expect_fetch_stones().returning(|| {
            Err(ClientError::UnexpectedStatus {
                path: "stones".to_string(),
                status: 500,
                body: "boom".to_string(),
            })
        });

        let result = Storefront::new(api).listing().await;

        assert!(
            matches!(result, Err(ClientError::UnexpectedStatus { status: 500, .. })),
            "expected UnexpectedStatus, got {result:?}"
        );
    }

    #[tokio::test]
    async fn category_page_pins_the_category() -> TestResult {
        let mut api = MockCatalogApi::new();

        api.expect_fetch_categories()
            .returning(|| Ok(vec![Category::new("c1", "Rings", "rings")]));
        api.expect_fetch_products().returning(|_| {
            Ok(vec![
                product("1", "c1", None),
                product("2", "c2", None),
                product("3", "c1", None),
            ])
        });
        api.expect_fetch_stones().returning(|| Ok(Vec::new()));

        let page = Storefront::new(api)
            .category_page("rings")
            .await?
            .ok_or("expected category page")?;

        let view = page.view(&page.session());

        assert_eq!(view.total_matches, 2);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_category_is_none() -> TestResult {
        let mut api = MockCatalogApi::new();

        api.expect_fetch_categories().returning(|| Ok(Vec::new()));
        api.expect_fetch_products().returning(|_| Ok(Vec::new()));
        api.expect_fetch_stones().returning(|| Ok(Vec::new()));

        assert!(Storefront::new(api).category_page("rings").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn product_page_ranks_similar_and_links_inquiry() -> TestResult {
        let mut api = MockCatalogApi::new();

        api.expect_fetch_product_by_slug().never();
        api.expect_fetch_products().returning(|_| {
            Ok(vec![
                product("1", "A", Some("X")),
                product("2", "A", Some("Y")),
                product("3", "B", Some("X")),
                product("4", "C", None),
            ])
        });
        api.expect_fetch_settings().returning(|| Ok(settings()));

        let page = Storefront::new(api)
            .product_page("product-1", 8)
            .await?
            .ok_or("expected product page")?;

        let similar: Vec<&str> = page.similar.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(similar, vec!["3", "2"]);
        assert_eq!(
            page.contact_link,
            "https://wa.me/919876543210?text=Hi%2C%20I'm%20interested%20in%20Product%201"
        );

        Ok(())
    }

    #[tokio::test]
    async fn missing_product_is_none() -> TestResult {
        let mut api = MockCatalogApi::new();

        api.expect_fetch_product_by_slug().never();
        api.expect_fetch_products()
            .returning(|_| Ok(vec![product("1", "A", Some("X"))]));
        api.expect_fetch_settings().returning(|| Ok(settings()));

        assert!(
            Storefront::new(api)
                .product_page("missing", 8)
                .await?
                .is_none()
        );

        Ok(())
    }

    #[tokio::test]
    async fn product_page_fails_when_catalog_fails() {
        let mut api = MockCatalogApi::new();

        api.expect_fetch_products().returning(|_| {
            Err(ClientError::UnexpectedStatus {
                path: "products".to_string(),
                status: 503,
                body: String::new(),
            })
        });
        api.expect_fetch_settings().returning(|| Ok(settings()));

        let result = Storefront::new(api).product_page("product-1", 8).await;

        assert!(
            matches!(result, Err(ClientError::UnexpectedStatus { status: 503, .. })),
            "expected UnexpectedStatus, got {result:?}"
        );
    }

    #[tokio::test]
    async fn featured_requests_featured_products_and_truncates() -> TestResult {
        let mut api = MockCatalogApi::new();

        api.expect_fetch_products()
            .withf(|query| query.featured == Some(true))
            .returning(|_| {
                Ok(vec![
                    product("1", "c1", None),
                    product("2", "c1", None),
                    product("3", "c1", None),
                ])
            });

        assert_eq!(Storefront::new(api).featured(2).await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn malformed_showrooms_fall_back_to_empty() -> TestResult {
        let mut api = MockCatalogApi::new();

        api.expect_fetch_settings().returning(|| {
            Ok(Settings {
                whatsapp: Some("919876543210".to_string()),
                showrooms: Some(Value::String("{not json".to_string())),
            })
        });

        let contact = Storefront::new(api).contact(None).await?;

        assert!(contact.showrooms.is_empty());
        assert_eq!(
            contact.contact_link,
            format!(
                "https://wa.me/919876543210?text={}",
                encode_component(GENERIC_INQUIRY)
            )
        );

        Ok(())
    }
}
