//! Filter results.

use crate::catalog::Product;
use serde::Serialize;

/// Products that passed a filter, with the size of the catalog they came from.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterResults<'a> {
    /// Matching products in catalog order.
    pub items: Vec<&'a Product>,
    /// Number of products in the catalog.
    pub catalog_size: usize,
    /// The search text the results were produced for.
    pub search_text: String,
}

impl<'a> FilterResults<'a> {
    /// Create results.
    pub fn new(items: Vec<&'a Product>, catalog_size: usize, search_text: impl Into<String>) -> Self {
        Self {
            items,
            catalog_size,
            search_text: search_text.into(),
        }
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the filter dropped anything.
    pub fn is_narrowed(&self) -> bool {
        self.items.len() < self.catalog_size
    }

    /// One-line summary, e.g. `Showing 1 of 8 products for "bamboo"`.
    pub fn summary(&self) -> String {
        let mut line = format!("Showing {} of {} products", self.len(), self.catalog_size);
        if !self.search_text.is_empty() {
            line.push_str(&format!(" for \"{}\"", self.search_text));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, StaticCatalog};
    use crate::search::FilterCriteria;

    #[test]
    fn test_summary_with_query() {
        let catalog = StaticCatalog::sample();
        let results = FilterCriteria::new()
            .with_search("bamboo")
            .results(catalog.products());

        assert_eq!(results.len(), 1);
        assert!(results.is_narrowed());
        assert_eq!(results.summary(), "Showing 1 of 8 products for \"bamboo\"");
    }

    #[test]
    fn test_summary_without_query() {
        let catalog = StaticCatalog::sample();
        let results = FilterCriteria::new().results(catalog.products());

        assert!(!results.is_narrowed());
        assert_eq!(results.summary(), "Showing 8 of 8 products");
    }

    #[test]
    fn test_empty_results() {
        let results = FilterResults::new(Vec::new(), 8, "unobtainium");
        assert!(results.is_empty());
        assert_eq!(results.summary(), "Showing 0 of 8 products for \"unobtainium\"");
    }
}
