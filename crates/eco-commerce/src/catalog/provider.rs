//! Catalog providers.
//!
//! The storefront only ever reads the catalog. A provider hands out an
//! ordered, immutable product list; `StaticCatalog` is the in-memory one,
//! built from the sample data or from a JSON/TOML catalog file.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Read-only source of products.
pub trait CatalogProvider {
    /// All products, in catalog order.
    fn products(&self) -> &[Product];

    /// The valid category set.
    fn categories(&self) -> &[Category] {
        &Category::ALL
    }

    /// Find a product by id.
    fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products().iter().find(|p| &p.id == id)
    }

    /// Find a product by id, failing with `ProductNotFound`.
    fn get(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.find(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Number of products.
    fn len(&self) -> usize {
        self.products().len()
    }

    /// Check if the catalog is empty.
    fn is_empty(&self) -> bool {
        self.products().is_empty()
    }
}

/// An in-memory catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl StaticCatalog {
    /// Build a catalog, rejecting duplicate ids and invalid products.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate().map_err(CommerceError::InvalidCatalog)?;
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON catalog: either a bare product array or
    /// `{"products": [...]}`.
    pub fn from_json(content: &str) -> Result<Self, CommerceError> {
        let products = match serde_json::from_str::<CatalogDocument>(content)? {
            CatalogDocument::Bare(products) | CatalogDocument::Wrapped { products } => products,
        };
        Self::new(products)
    }

    /// Parse a TOML catalog made of `[[products]]` tables.
    pub fn from_toml(content: &str) -> Result<Self, CommerceError> {
        #[derive(Deserialize)]
        struct CatalogTable {
            products: Vec<Product>,
        }

        let table: CatalogTable = toml::from_str(content)?;
        Self::new(table.products)
    }

    /// Load a catalog file, choosing the format from the extension.
    pub fn load(path: &Path) -> Result<Self, CommerceError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::InvalidCatalog(format!("cannot read {}: {}", path.display(), e))
        })?;

        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content)?,
            _ => Self::from_json(&content)?,
        };

        tracing::info!(
            path = %path.display(),
            products = catalog.products.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The built-in eight-product sample catalog.
    pub fn sample() -> Self {
        Self {
            products: sample_products(),
        }
    }

    /// Highest price in the catalog.
    pub fn max_price(&self) -> Money {
        self.products
            .iter()
            .map(|p| p.price)
            .max()
            .unwrap_or(Money::ZERO)
    }
}

impl CatalogProvider for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new("1", "Organic Cotton T-Shirt", Money::new(2499), Category::Clothing)
            .with_description(
                "Made from 100% organic cotton, this soft and comfortable t-shirt is perfect \
                 for everyday wear. Ethically sourced and sustainably produced.",
            )
            .with_image("/assets/organic-tshirt.jpg")
            .with_rating(4.8, 124),
        Product::new("2", "Bamboo Water Bottle", Money::new(1999), Category::Accessories)
            .with_description(
                "Stay hydrated with our eco-friendly bamboo water bottle. Features double-wall \
                 insulation to keep drinks cold for 24 hours or hot for 12 hours.",
            )
            .with_image("/assets/bamboo-bottle.jpg")
            .with_rating(4.9, 89),
        Product::new("3", "Recycled Backpack", Money::new(7499), Category::Accessories)
            .with_description(
                "Durable backpack made from recycled plastic bottles. Features multiple \
                 compartments and laptop sleeve. Perfect for work, school, or travel.",
            )
            .with_image("/assets/recycled-backpack.jpg")
            .with_rating(4.7, 156),
        Product::new("4", "Solar Phone Charger", Money::new(4199), Category::Electronics)
            .with_description(
                "Portable solar-powered phone charger with high-efficiency solar panels. \
                 Never run out of battery when you're outdoors.",
            )
            .with_image("/assets/solar-charger.jpg")
            .with_rating(4.6, 73),
        Product::new("5", "Organic Skincare Set", Money::new(3299), Category::Beauty)
            .with_description(
                "Complete skincare routine with organic ingredients. Includes cleanser, \
                 moisturizer, and serum in eco-friendly packaging.",
            )
            .with_image("/assets/skincare-set.jpg")
            .with_rating(4.9, 201),
        Product::new("6", "Hemp Sneakers", Money::new(6799), Category::Clothing)
            .with_description(
                "Comfortable and stylish sneakers made from sustainable hemp fiber. \
                 Breathable, durable, and perfect for casual wear.",
            )
            .with_image("/assets/hemp-sneakers.jpg")
            .with_rating(4.5, 92),
        Product::new("7", "Compost Bin", Money::new(2899), Category::Home)
            .with_description(
                "Start your composting journey with this compact kitchen compost bin. \
                 Features carbon filter to eliminate odors.",
            )
            .with_image("/assets/compost-bin.jpg")
            .with_rating(4.4, 67),
        Product::new("8", "Reusable Food Wraps", Money::new(1599), Category::Home)
            .with_description(
                "Set of 3 beeswax food wraps in different sizes. Perfect replacement for \
                 plastic wrap, completely biodegradable.",
            )
            .with_image("/assets/food-wraps.jpg")
            .with_rating(4.8, 134),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog() {
        let catalog = StaticCatalog::sample();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.max_price(), Money::new(7499));
        assert!(StaticCatalog::new(catalog.products().to_vec()).is_ok());
    }

    #[test]
    fn test_find_and_get() {
        let catalog = StaticCatalog::sample();
        let bottle = catalog.find(&ProductId::new("2")).unwrap();
        assert_eq!(bottle.name, "Bamboo Water Bottle");

        let missing = catalog.get(&ProductId::new("99"));
        assert_eq!(missing, Err(CommerceError::ProductNotFound("99".into())));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = Product::new("1", "A", Money::new(10), Category::Home);
        let b = Product::new("1", "B", Money::new(20), Category::Home);
        let err = StaticCatalog::new(vec![a, b]).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCatalog(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_from_json_bare_and_wrapped() {
        let bare = r#"[{"id":"a","name":"A","price":5,"description":"","category":"home",
                        "inStock":false,"rating":3.0,"reviewCount":2}]"#;
        let catalog = StaticCatalog::from_json(bare).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.products()[0].in_stock);

        let wrapped = format!(r#"{{"products": {}}}"#, bare);
        assert_eq!(StaticCatalog::from_json(&wrapped).unwrap(), catalog);
    }

    #[test]
    fn test_from_toml() {
        let content = r#"
            [[products]]
            id = "t1"
            name = "Linen Shirt"
            price = 3100
            description = "Breezy"
            category = "clothing"
            inStock = true
            rating = 4.1
            reviewCount = 12
        "#;
        let catalog = StaticCatalog::from_toml(content).unwrap();
        assert_eq!(catalog.products()[0].price, Money::new(3100));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"[{"id":"a","name":"A","price":5,"description":"","category":"garden",
                        "inStock":true,"rating":1.0,"reviewCount":0}]"#;
        assert!(StaticCatalog::from_json(json).is_err());
    }
}
