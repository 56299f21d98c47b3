//! Product catalog module.
//!
//! Contains products, categories and the read-only catalog providers.

mod category;
mod product;
mod provider;

pub use category::{Category, ALL_CATEGORIES};
pub use product::{Product, MAX_RATING};
pub use provider::{CatalogProvider, StaticCatalog};
