//! Show one product.

use anyhow::Result;
use eco_commerce::catalog::{CatalogProvider, Product};
use eco_commerce::ProductId;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{stars, stock_badge, Output};

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.get(&ProductId::new(args.id.trim()))?;
    print_product(&ctx.output, product);
    Ok(())
}

/// Print a product detail view.
pub fn print_product(output: &Output, product: &Product) {
    if output.is_json() {
        output.json(product);
        return;
    }

    output.header(&product.name);
    output.kv("ID", product.id.as_str());
    output.kv("Price", &output.money(product.price));
    output.kv("Category", product.category.display_name());
    output.kv(
        "Rating",
        &format!(
            "{} {:.1} ({} reviews)",
            stars(product.full_stars()),
            product.rating,
            product.review_count
        ),
    );
    output.kv("Stock", &stock_badge(product.in_stock));
    if !product.image.is_empty() {
        output.kv("Image", &product.image);
    }
    if !product.description.is_empty() {
        output.line("");
        output.line(&format!("  {}", product.description));
    }
}
