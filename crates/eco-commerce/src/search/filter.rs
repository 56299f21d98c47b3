//! Catalog filter criteria.
//!
//! Filtering is a pure function of the catalog and a `FilterCriteria`:
//! a product is kept when it passes the text, category and price
//! predicates together. Catalog order is preserved.

use std::collections::BTreeSet;

use crate::catalog::{Category, Product, ALL_CATEGORIES};
use crate::money::Money;
use crate::search::FilterResults;
use serde::{Deserialize, Serialize};

/// Upper bound of the price slider.
pub const DEFAULT_PRICE_CEILING: i64 = 8000;

/// Step of the price slider.
pub const PRICE_STEP: i64 = 500;

/// Selected category labels.
///
/// An empty selection and a selection containing `"all"` both mean
/// "no category restriction". Labels are stored trimmed and lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySelection(BTreeSet<String>);

impl CategorySelection {
    /// The empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The `{"all"}` selection.
    pub fn all() -> Self {
        Self::from_labels([ALL_CATEGORIES])
    }

    /// Build a selection from labels.
    ///
    /// Labels are trimmed and lowercased, so `"Home"` and `" home "` both
    /// select the `home` category. Any other label is kept as given and
    /// matches no product.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(labels.into_iter().map(|l| normalize(l.as_ref())).collect())
    }

    /// Select only the given categories.
    pub fn only(categories: &[Category]) -> Self {
        Self::from_labels(categories.iter().map(Category::as_str))
    }

    /// Check if the selection places no restriction.
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty() || self.0.contains(ALL_CATEGORIES)
    }

    /// Check if a category passes the selection.
    pub fn allows(&self, category: Category) -> bool {
        self.is_unrestricted() || self.0.contains(category.as_str())
    }

    /// Check if a label is selected.
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(&normalize(label))
    }

    /// Selected labels, sorted.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Toggle a label the way the category sidebar does.
    ///
    /// Toggling `"all"` selects only `"all"`. Toggling a selected label
    /// deselects it; toggling any other label drops `"all"` and selects it.
    /// A selection left empty falls back to `"all"`.
    pub fn toggle(&mut self, label: &str) {
        let label = normalize(label);
        if label == ALL_CATEGORIES {
            *self = Self::all();
            return;
        }

        if !self.0.remove(&label) {
            self.0.remove(ALL_CATEGORIES);
            self.0.insert(label);
        }

        if self.0.is_empty() {
            *self = Self::all();
        }
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Create a range. An inverted range (`min > max`) is allowed and
    /// matches nothing.
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// `[0, ceiling]`.
    pub fn up_to(ceiling: Money) -> Self {
        Self::new(Money::ZERO, ceiling)
    }

    /// Check if a price lies within the bounds, both ends inclusive.
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }

    /// Check if the range matches nothing.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::up_to(Money::new(DEFAULT_PRICE_CEILING))
    }
}

/// Everything the product listing filters on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name and description.
    #[serde(default)]
    pub search_text: String,
    /// Category restriction.
    #[serde(default)]
    pub categories: CategorySelection,
    /// Inclusive price bounds.
    #[serde(default)]
    pub price_range: PriceRange,
}

impl FilterCriteria {
    /// Criteria that restrict nothing within the default price bounds.
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            categories: CategorySelection::all(),
            price_range: PriceRange::default(),
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Set the category selection.
    pub fn with_categories(mut self, categories: CategorySelection) -> Self {
        self.categories = categories;
        self
    }

    /// Set the price bounds.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Clear every filter back to its default, keeping the given ceiling.
    pub fn reset(&mut self, price_ceiling: Money) {
        *self = Self::new().with_price_range(PriceRange::up_to(price_ceiling));
    }

    /// Check if any filter narrows the default listing.
    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty()
            || !self.categories.is_unrestricted()
            || self.price_range != PriceRange::default()
    }

    /// Check if a product passes all three predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with(product, &self.search_text.to_lowercase())
    }

    fn matches_with(&self, product: &Product, needle: &str) -> bool {
        matches_text(product, needle)
            && self.categories.allows(product.category)
            && self.price_range.contains(product.price)
    }

    /// The matching products, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        let needle = self.search_text.to_lowercase();
        catalog
            .iter()
            .filter(|p| self.matches_with(p, &needle))
            .collect()
    }

    /// The matching products wrapped with the catalog size.
    pub fn results<'a>(&self, catalog: &'a [Product]) -> FilterResults<'a> {
        FilterResults::new(self.apply(catalog), catalog.len(), self.search_text.clone())
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_text(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// Filter a catalog. Shorthand for [`FilterCriteria::apply`].
pub fn filter_products<'a>(catalog: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    criteria.apply(catalog)
}
