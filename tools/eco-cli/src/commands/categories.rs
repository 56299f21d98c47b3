//! List categories.

use anyhow::Result;
use eco_commerce::catalog::{CatalogProvider, Category, ALL_CATEGORIES};
use serde::Serialize;

use crate::context::Context;

#[derive(Serialize)]
struct CategoryCount {
    label: &'static str,
    name: &'static str,
    products: usize,
}

/// Count products per category label, the "all" sentinel first.
fn count_by_category(catalog: &impl CatalogProvider) -> Vec<CategoryCount> {
    let all = CategoryCount {
        label: ALL_CATEGORIES,
        name: "All Products",
        products: catalog.len(),
    };
    let per_category = catalog.categories().iter().map(|category: &Category| CategoryCount {
        label: category.as_str(),
        name: category.display_name(),
        products: catalog
            .products()
            .iter()
            .filter(|p| p.category == *category)
            .count(),
    });
    std::iter::once(all).chain(per_category).collect()
}

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let counts = count_by_category(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&counts);
        return Ok(());
    }

    ctx.output.header("Categories");
    let widths = [12, 14, 8];
    ctx.output.table_row(&["Label", "Name", "Products"], &widths);
    for count in &counts {
        ctx.output.table_row(
            &[count.label, count.name, &count.products.to_string()],
            &widths,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_commerce::catalog::StaticCatalog;

    #[test]
    fn test_counts() {
        let counts = count_by_category(&StaticCatalog::sample());
        let summary: Vec<(&str, usize)> = counts.iter().map(|c| (c.label, c.products)).collect();
        assert_eq!(
            summary,
            vec![
                ("all", 8),
                ("clothing", 2),
                ("accessories", 2),
                ("electronics", 1),
                ("beauty", 1),
                ("home", 2),
            ]
        );
    }
}
