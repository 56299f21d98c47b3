//! Cart actions and the reducer that applies them.

use crate::cart::CartState;
use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A cart mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    /// Add one unit of a product.
    AddItem { product: Product },
    /// Remove a product's line.
    RemoveItem { product_id: ProductId },
    /// Set a line's quantity; zero or less removes it.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Empty the cart.
    Clear,
}

impl CartAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CartAction::AddItem { .. } => "add_item",
            CartAction::RemoveItem { .. } => "remove_item",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::Clear => "clear",
        }
    }
}

impl CartState {
    /// Apply one action, returning the next state.
    pub fn reduce(&self, action: &CartAction) -> CartState {
        let next = match action {
            CartAction::AddItem { product } => self.add_item(product),
            CartAction::RemoveItem { product_id } => self.remove_item(product_id),
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => self.update_quantity(product_id, *quantity),
            CartAction::Clear => self.clear(),
        };

        tracing::debug!(
            action = action.as_str(),
            lines = next.unique_item_count(),
            item_count = next.item_count(),
            total = next.total().amount(),
            "cart updated"
        );
        next
    }

    /// Apply a sequence of actions starting from an empty cart.
    pub fn replay<'a>(actions: impl IntoIterator<Item = &'a CartAction>) -> CartState {
        actions
            .into_iter()
            .fold(CartState::new(), |cart, action| cart.reduce(action))
    }
}
