//! Storefront domain types and logic for EcoShop.
//!
//! - **Catalog**: Products, the fixed category set, catalog providers
//! - **Cart**: Immutable cart state driven by a reducer, order summary pricing
//! - **Search**: Text, category and price filters over the catalog
//! - **Checkout**: Form validation and a simulated order placement
//!
//! # Example
//!
//! ```rust
//! use eco_commerce::prelude::*;
//!
//! let catalog = StaticCatalog::sample();
//! let shirt = catalog.get(&ProductId::new("1")).unwrap();
//! let bottle = catalog.get(&ProductId::new("2")).unwrap();
//!
//! let cart = CartState::new().add_items(shirt, 2).add_item(bottle);
//! assert_eq!(cart.total(), Money::new(6997));
//!
//! let summary = OrderSummary::for_cart(&cart, TaxRate::STANDARD);
//! assert_eq!(summary.grand_total, Money::new(8256));
//!
//! let hits = FilterCriteria::new().with_search("bamboo").apply(catalog.products());
//! assert_eq!(hits[0].name, "Bamboo Water Bottle");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{CatalogProvider, Category, Product, StaticCatalog, ALL_CATEGORIES};

    // Cart
    pub use crate::cart::{CartAction, CartLineItem, CartState, OrderSummary, TaxRate};

    // Search
    pub use crate::search::{
        filter_products, CategorySelection, FilterCriteria, FilterResults, PriceRange,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutConfig, CheckoutFlow, CheckoutForm, CheckoutStatus, Order, ShippingAddress,
    };
}
