//! Catalog filtering.
//!
//! Narrows the catalog by search text, category selection and price range.

mod filter;
mod results;

pub use filter::{
    filter_products, CategorySelection, FilterCriteria, PriceRange, DEFAULT_PRICE_CEILING,
    PRICE_STEP,
};
pub use results::FilterResults;
