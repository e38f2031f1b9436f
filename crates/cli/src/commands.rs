//! Command dispatch.

use std::io;

use aurum::listing::ListingSession;
use aurum_client::{CatalogApi, Storefront};
use tracing::info;

use crate::{
    config::{Command, FilterArgs},
    errors::CliError,
    render,
};

/// Run a command against a storefront and write its output.
pub(crate) async fn run<A: CatalogApi>(
    command: &Command,
    storefront: &Storefront<A>,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    match command {
        Command::Products { category, filters } => {
            let listing = storefront.listing().await?;
            let mut session = ListingSession::new();

            session.set_category(category.clone());
            apply_filters(&mut session, filters);

            let stones = render::stone_names(&listing.stones);

            render::write_listing(out, &listing.view(&session), &stones)?;
        }
        Command::Category { slug, filters } => {
            let page = storefront
                .category_page(slug)
                .await?
                .ok_or_else(|| not_found("category", slug))?;
            let mut session = page.session();

            apply_filters(&mut session, filters);

            info!(category = %page.category.name, "rendering category page");

            writeln!(out, "{}", page.category.name)?;

            if let Some(description) = page.category.description.as_deref() {
                writeln!(out, "{description}")?;
            }

            let stones = render::stone_names(&page.stones);

            render::write_listing(out, &page.view(&session), &stones)?;
        }
        Command::Product {
            slug,
            similar_limit,
        } => {
            let (page, stones) = tokio::try_join!(
                storefront.product_page(slug, *similar_limit),
                storefront.api().fetch_stones(),
            )?;
            let page = page.ok_or_else(|| not_found("product", slug))?;

            render::write_product_page(out, &page, &render::stone_names(&stones))?;
        }
        Command::Featured { limit } => {
            let (featured, stones) = tokio::try_join!(
                storefront.featured(*limit),
                storefront.api().fetch_stones(),
            )?;

            if featured.is_empty() {
                writeln!(out, "No featured products.")?;
            } else {
                let featured: Vec<_> = featured.iter().collect();

                render::write_products(out, &featured, &render::stone_names(&stones))?;
            }
        }
        Command::Categories => {
            render::write_categories(out, &storefront.api().fetch_categories().await?)?;
        }
        Command::Stones => {
            render::write_stones(out, &storefront.api().fetch_stones().await?)?;
        }
        Command::Contact { product } => {
            let title = match product {
                Some(slug) => Some(
                    storefront
                        .api()
                        .fetch_product_by_slug(slug)
                        .await?
                        .ok_or_else(|| not_found("product", slug))?
                        .title,
                ),
                None => None,
            };
            let contact = storefront.contact(title.as_deref()).await?;

            render::write_contact(out, &contact)?;
        }
    }

    Ok(())
}

fn apply_filters(session: &mut ListingSession, filters: &FilterArgs) {
    session.set_color(filters.color);
    session.set_carat(filters.carat);
    session.set_stone(filters.stone.clone());
    session.set_page(filters.page);
}

fn not_found(kind: &'static str, slug: &str) -> CliError {
    CliError::NotFound {
        kind,
        slug: slug.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use aurum::fixtures::CatalogSnapshot;
    use aurum_client::SnapshotCatalog;
    use testresult::TestResult;

    use super::*;

    const SNAPSHOT: &str = r"
products:
  - _id: p1
    title: Solitaire Ring
    slug: solitaire-ring
    price: 45999
    category: { _id: c1, name: Rings, slug: rings }
    subcategory: s1
    colors: [Yellow]
    carat: 18k
    stones: [st1]
    featured: true
  - _id: p2
    title: Halo Ring
    slug: halo-ring
    price: 52999
    category: { _id: c1, name: Rings, slug: rings }
    subcategory: s1
    colors: [Rose]
    carat: 14k
  - _id: p3
    title: Rope Chain
    slug: rope-chain
    price: 18999
    category: { _id: c2, name: Chains, slug: chains }
    colors: [Yellow]
    carat: 22k
categories:
  - { _id: c1, name: Rings, slug: rings }
  - { _id: c2, name: Chains, slug: chains }
stones:
  - { _id: st1, name: Diamond }
settings:
  whatsapp: '919876543210'
";

    fn storefront() -> TestResult<Storefront<SnapshotCatalog>> {
        let snapshot = CatalogSnapshot::from_yaml_str(SNAPSHOT)?;

        Ok(Storefront::new(SnapshotCatalog::new(snapshot)))
    }

    async fn output(command: Command) -> TestResult<String> {
        let mut out = Vec::new();

        run(&command, &storefront()?, &mut out).await?;

        Ok(String::from_utf8(out)?)
    }

    #[tokio::test]
    async fn products_apply_filters() -> TestResult {
        let filters = FilterArgs {
            color: Some(aurum::palette::Color::Yellow),
            page: 1,
            ..FilterArgs::default()
        };

        let out = output(Command::Products {
            category: None,
            filters,
        })
        .await?;

        assert!(out.contains("Solitaire Ring"), "got {out}");
        assert!(out.contains("Rope Chain"), "got {out}");
        assert!(!out.contains("Halo Ring"), "got {out}");
        assert!(out.contains("Diamond"), "got {out}");
        assert!(out.contains("Page 1 of 1 (2 products)"), "got {out}");

        Ok(())
    }

    #[tokio::test]
    async fn category_page_limits_to_category() -> TestResult {
        let out = output(Command::Category {
            slug: "chains".to_string(),
            filters: FilterArgs::default(),
        })
        .await?;

        assert!(out.contains("Rope Chain"), "got {out}");
        assert!(!out.contains("Solitaire Ring"), "got {out}");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() -> TestResult {
        let mut out = Vec::new();
        let command = Command::Category {
            slug: "bangles".to_string(),
            filters: FilterArgs::default(),
        };

        let result = run(&command, &storefront()?, &mut out).await;

        assert!(
            matches!(result, Err(CliError::NotFound { kind: "category", .. })),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn product_page_lists_similar_products() -> TestResult {
        let out = output(Command::Product {
            slug: "solitaire-ring".to_string(),
            similar_limit: 8,
        })
        .await?;

        assert!(out.contains("Similar products"), "got {out}");
        assert!(out.contains("Halo Ring"), "got {out}");
        assert!(!out.contains("Rope Chain"), "got {out}");
        assert!(
            out.contains("https://wa.me/919876543210?text=Hi%2C%20I'm%20interested%20in%20Solitaire%20Ring"),
            "got {out}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn contact_about_product() -> TestResult {
        let out = output(Command::Contact {
            product: Some("rope-chain".to_string()),
        })
        .await?;

        assert_eq!(
            out,
            "Inquire: https://wa.me/919876543210?text=Hi%2C%20I'm%20interested%20in%20Rope%20Chain\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn featured_lists_only_featured() -> TestResult {
        let out = output(Command::Featured { limit: 8 }).await?;

        assert!(out.contains("Solitaire Ring"), "got {out}");
        assert!(!out.contains("Halo Ring"), "got {out}");

        Ok(())
    }
}
