//! Shopping cart module.
//!
//! Contains the cart state, the action reducer and order summary pricing.

mod action;
mod cart;
mod pricing;

pub use action::CartAction;
pub use cart::{CartLineItem, CartState};
pub use pricing::{OrderSummary, TaxRate};
