//! Simulated checkout.
//!
//! Validates the checkout form, snapshots the cart into an order summary and
//! places an ephemeral order after a fixed processing delay.

mod address;
mod flow;
mod form;
mod order;

pub use address::ShippingAddress;
pub use flow::{
    CheckoutConfig, CheckoutFlow, CheckoutStatus, DEFAULT_ORDER_PREFIX, DEFAULT_PROCESSING_DELAY,
};
pub use form::CheckoutForm;
pub use order::{MaskedCard, Order};
