//! Commerce error types.
//!
//! The cart reducer and the catalog filter never fail. These errors cover
//! the operations around them: catalog loading, lookups and checkout.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Unknown category label.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Checkout form is missing required fields.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Catalog data failed validation.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CommerceError::ProductNotFound("42".into()).to_string(),
            "Product not found: 42"
        );
        assert_eq!(
            CommerceError::CheckoutIncomplete("email, city".into()).to_string(),
            "Checkout incomplete: missing email, city"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CommerceError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CommerceError::Serialization(_)));
    }
}
