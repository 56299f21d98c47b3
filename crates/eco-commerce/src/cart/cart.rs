//! Cart state and line items.
//!
//! `CartState` is an immutable value: every operation returns a new state
//! with `total` and `item_count` recomputed from the lines. The derived
//! fields are private, so they can never drift from the lines.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// One product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// The product as it was when added.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Product id of this line.
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<CartLineItem>,
    total: Money,
    item_count: u64,
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    fn from_items(items: Vec<CartLineItem>) -> Self {
        let total = items.iter().map(CartLineItem::line_total).sum();
        let item_count = items.iter().map(|i| u64::from(i.quantity)).sum();
        Self {
            items,
            total,
            item_count,
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line or appends a new one with quantity 1.
    /// Stock is not enforced.
    pub fn add_item(&self, product: &Product) -> Self {
        let mut items = self.items.clone();
        match items.iter_mut().find(|i| i.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => items.push(CartLineItem::new(product.clone())),
        }
        Self::from_items(items)
    }

    /// Add `count` units of a product.
    ///
    /// Same result as `count` calls to [`add_item`](Self::add_item), in one
    /// step. A count of zero leaves the cart unchanged.
    pub fn add_items(&self, product: &Product, count: u32) -> Self {
        if count == 0 {
            return self.clone();
        }

        let mut items = self.items.clone();
        match items.iter_mut().find(|i| i.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(count),
            None => items.push(CartLineItem {
                product: product.clone(),
                quantity: count,
            }),
        }
        Self::from_items(items)
    }

    /// Remove a product's line. Absent ids are ignored.
    pub fn remove_item(&self, product_id: &ProductId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|i| &i.product.id != product_id)
            .cloned()
            .collect();
        Self::from_items(items)
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Absent ids are ignored.
    pub fn update_quantity(&self, product_id: &ProductId, quantity: i64) -> Self {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let items = self
            .items
            .iter()
            .map(|i| {
                if &i.product.id == product_id {
                    CartLineItem {
                        product: i.product.clone(),
                        quantity,
                    }
                } else {
                    i.clone()
                }
            })
            .collect();
        Self::from_items(items)
    }

    /// An empty cart, whatever the current state.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for a product, if any.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.line(product_id).is_some()
    }

    /// Quantity of a product, zero when absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.line(product_id).map(|l| l.quantity).unwrap_or(0)
    }
}
