//! Product type.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// A product in the catalog.
///
/// Products are owned by the catalog provider and never mutated by the
/// cart or the filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Full description.
    pub description: String,
    /// Image asset path, passed through to the presentation layer.
    #[serde(default)]
    pub image: String,
    /// Catalog category.
    pub category: Category,
    /// Stock flag. Informational only: out-of-stock products can still be
    /// added to a cart.
    pub in_stock: bool,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    #[serde(alias = "reviews")]
    pub review_count: u32,
}

impl Product {
    /// Create a product with the fields the storefront cannot default.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            image: String::new(),
            category,
            in_stock: true,
            rating: 0.0,
            review_count: 0,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image asset path.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the rating and review count.
    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Set the stock flag.
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Number of filled stars out of five.
    pub fn full_stars(&self) -> u8 {
        self.rating.clamp(0.0, MAX_RATING).floor() as u8
    }

    /// Check the invariants a catalog provider must uphold.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.id.as_str().trim().is_empty() {
            return Err(format!("product '{}' has an empty id", self.name));
        }
        if self.price.is_negative() {
            return Err(format!("product {} has a negative price", self.id));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(format!(
                "product {} has rating {} outside 0-{}",
                self.id, self.rating, MAX_RATING
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let product = Product::new("9", "Jute Tote", Money::new(899), Category::Accessories)
            .with_description("A sturdy jute bag")
            .with_rating(4.2, 17)
            .with_stock(false);

        assert_eq!(product.id.as_str(), "9");
        assert_eq!(product.full_stars(), 4);
        assert!(!product.in_stock);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let negative = Product::new("1", "Broken", Money::new(-1), Category::Home);
        assert!(negative.validate().is_err());

        let overrated = Product::new("2", "Hype", Money::new(10), Category::Home).with_rating(5.5, 1);
        assert!(overrated.validate().is_err());

        let anonymous = Product::new(" ", "Nameless", Money::new(10), Category::Home);
        assert!(anonymous.validate().is_err());
    }

    #[test]
    fn test_deserialize_catalog_record() {
        let json = r#"{
            "id": "2",
            "name": "Bamboo Water Bottle",
            "price": 1999,
            "description": "Stay hydrated",
            "image": "/assets/bamboo-bottle.jpg",
            "category": "accessories",
            "inStock": true,
            "rating": 4.9,
            "reviews": 89
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Money::new(1999));
        assert_eq!(product.category, Category::Accessories);
        assert_eq!(product.review_count, 89);
    }
}
