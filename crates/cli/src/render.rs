//! Terminal rendering.

use std::io;

use aurum::{
    categories::Category,
    listing::ListingPage,
    pricing::display_price,
    products::{NOT_AVAILABLE, Product},
    stones::Stone,
};
use aurum_client::storefront::{ContactPage, ProductPage};
use rustc_hash::FxHashMap;
use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

/// Stone names by id, for products that reference stones by id only.
pub(crate) type StoneNames<'a> = FxHashMap<&'a str, &'a str>;

pub(crate) fn stone_names(stones: &[Stone]) -> StoneNames<'_> {
    stones
        .iter()
        .map(|stone| (stone.id.as_str(), stone.name.as_str()))
        .collect()
}

/// Write a page of products followed by the page position.
pub(crate) fn write_listing(
    out: &mut impl io::Write,
    page: &ListingPage<'_>,
    stones: &StoneNames<'_>,
) -> io::Result<()> {
    if page.is_empty() {
        return writeln!(out, "No products match the selected filters.");
    }

    write_products(out, &page.products, stones)?;

    writeln!(
        out,
        "Page {} of {} ({} products)",
        page.page, page.total_pages, page.total_matches
    )
}

/// Write a product table.
pub(crate) fn write_products(
    out: &mut impl io::Write,
    products: &[&Product],
    stones: &StoneNames<'_>,
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Title", "Slug", "Category", "Price", "Colors", "Carat", "Stones"]);

    for product in products {
        builder.push_record([
            product.title.clone(),
            product.slug.clone(),
            product.category_name().to_string(),
            display_price(product.price),
            colors(product),
            product.carat.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            stone_label(product, stones),
        ]);
    }

    let mut table = builder.build();

    style(&mut table);
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "{table}")
}

/// Write a product detail page.
pub(crate) fn write_product_page(
    out: &mut impl io::Write,
    page: &ProductPage,
    stones: &StoneNames<'_>,
) -> io::Result<()> {
    let product = &page.product;
    let mut builder = Builder::default();

    builder.push_record(["Title", product.title.as_str()]);
    builder.push_record(["Price", display_price(product.price).as_str()]);
    builder.push_record(["Category", product.category_name()]);
    builder.push_record(["Colors", colors(product).as_str()]);
    builder.push_record(["Carat", product.carat.as_deref().unwrap_or(NOT_AVAILABLE)]);
    builder.push_record(["Stones", stone_label(product, stones).as_str()]);

    if let Some(description) = product.description.as_deref() {
        builder.push_record(["Description", description]);
    }

    if let Some(photo) = product.primary_photo() {
        builder.push_record(["Photo", photo.url.as_str()]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::first(), Color::BOLD);

    writeln!(out, "{table}")?;

    if page.similar.is_empty() {
        writeln!(out, "No similar products.")?;
    } else {
        writeln!(out, "\nSimilar products")?;

        let similar: Vec<&Product> = page.similar.iter().collect();

        write_products(out, &similar, stones)?;
    }

    writeln!(out, "\nInquire: {}", page.contact_link)
}

pub(crate) fn write_categories(
    out: &mut impl io::Write,
    categories: &[Category],
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Name", "Slug", "Description"]);

    for category in categories {
        builder.push_record([
            category.name.as_str(),
            category.slug.as_str(),
            category.description.as_deref().unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();

    style(&mut table);

    writeln!(out, "{table}")
}

pub(crate) fn write_stones(out: &mut impl io::Write, stones: &[Stone]) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name"]);

    for stone in stones {
        builder.push_record([stone.id.as_str(), stone.name.as_str()]);
    }

    let mut table = builder.build();

    style(&mut table);

    writeln!(out, "{table}")
}

pub(crate) fn write_contact(out: &mut impl io::Write, contact: &ContactPage) -> io::Result<()> {
    writeln!(out, "Inquire: {}", contact.contact_link)?;

    if contact.showrooms.is_empty() {
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Showroom", "Address", "Phone", "Email"]);

    for showroom in &contact.showrooms {
        builder.push_record([
            showroom.name.clone(),
            format!("{}, {}, {}", showroom.address, showroom.city, showroom.country),
            showroom.phone.clone().unwrap_or_default(),
            showroom.email.clone().unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();

    style(&mut table);

    writeln!(out, "\n{table}")
}

fn style(table: &mut Table) {
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
}

fn colors(product: &Product) -> String {
    if product.colors.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    product.colors.join(", ")
}

/// Stone names, resolving bare references through `stones`.
fn stone_label(product: &Product, stones: &StoneNames<'_>) -> String {
    let names: Vec<&str> = product
        .stones
        .iter()
        .filter_map(|stone| {
            stone.name().or_else(|| {
                stone
                    .resolve()
                    .map(|id| stones.get(id).copied().unwrap_or(id))
            })
        })
        .collect();

    if names.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    names.join(", ")
}
