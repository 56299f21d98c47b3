//! List and filter products.

use std::str::FromStr;

use anyhow::Result;
use eco_commerce::catalog::{CatalogProvider, Category, Product, ALL_CATEGORIES};
use eco_commerce::search::{CategorySelection, FilterCriteria, FilterResults, PriceRange};
use eco_commerce::Money;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{stars, stock_badge, Output};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let criteria = criteria_from_args(&args, ctx.config.price_ceiling());

    for label in criteria.categories.labels() {
        if label != ALL_CATEGORIES && Category::from_str(label).is_err() {
            ctx.output
                .warn(&format!("Unknown category '{}' matches no products", label));
        }
    }
    if criteria.price_range.is_inverted() {
        ctx.output.warn("Minimum price is above maximum price");
    }

    let results = criteria.results(catalog.products());
    print_results(&ctx.output, &results);
    Ok(())
}

/// Build filter criteria from command line flags.
pub fn criteria_from_args(args: &ProductsArgs, ceiling: Money) -> FilterCriteria {
    let categories = if args.categories.is_empty() {
        CategorySelection::all()
    } else {
        CategorySelection::from_labels(&args.categories)
    };
    let min = args.min.map(Money::new).unwrap_or(Money::ZERO);
    let max = args.max.map(Money::new).unwrap_or(ceiling);

    FilterCriteria::new()
        .with_search(args.search.clone().unwrap_or_default())
        .with_categories(categories)
        .with_price_range(PriceRange::new(min, max))
}

/// Print filter results as a table.
pub fn print_results(output: &Output, results: &FilterResults<'_>) {
    if output.is_json() {
        output.json(results);
        return;
    }

    output.header(&results.summary());
    if results.is_empty() {
        output.info("No products found. Try adjusting your filters.");
        return;
    }

    let widths = [4, 26, 12, 10, 10, 0];
    output.table_row(&["ID", "Name", "Category", "Price", "Rating", "Stock"], &widths);
    for product in &results.items {
        print_row(output, product, &widths);
    }
}

fn print_row(output: &Output, product: &Product, widths: &[usize]) {
    let row = [
        product.id.as_str().to_string(),
        product.name.clone(),
        product.category.display_name().to_string(),
        output.money(product.price),
        format!("{} {:.1}", stars(product.full_stars()), product.rating),
        stock_badge(product.in_stock),
    ];
    let cols: Vec<&str> = row.iter().map(String::as_str).collect();
    output.table_row(&cols, widths);
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_commerce::catalog::StaticCatalog;

    fn args() -> ProductsArgs {
        ProductsArgs {
            search: None,
            categories: Vec::new(),
            min: None,
            max: None,
        }
    }

    #[test]
    fn test_default_args_show_everything() {
        let catalog = StaticCatalog::sample();
        let criteria = criteria_from_args(&args(), Money::new(8000));
        assert!(!criteria.is_active());
        assert_eq!(criteria.apply(catalog.products()).len(), 8);
    }

    #[test]
    fn test_args_narrow_listing() {
        let catalog = StaticCatalog::sample();
        let args = ProductsArgs {
            categories: vec!["Home".into()],
            max: Some(2000),
            ..args()
        };
        let hits = criteria_from_args(&args, Money::new(8000)).apply(catalog.products());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Reusable Food Wraps");
    }

    #[test]
    fn test_ceiling_comes_from_config() {
        let catalog = StaticCatalog::sample();
        let criteria = criteria_from_args(&args(), Money::new(3000));
        assert_eq!(criteria.apply(catalog.products()).len(), 4);
    }
}
