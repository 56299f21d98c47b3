//! Identifier newtypes.
//!
//! Product ids come from the catalog and are stable. Order ids are minted by
//! the checkout flow and only live as long as the order value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a string-backed id that serializes as a bare string.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_id!(
    /// Stable catalog identifier of a product.
    ProductId
);
define_id!(
    /// Ephemeral order number handed out by the simulated checkout.
    OrderId
);

impl OrderId {
    /// Build an order number from a prefix and a timestamp, e.g. `ECO-1718000000000`.
    pub fn generate(prefix: &str, at: DateTime<Utc>) -> Self {
        Self(format!("{}-{}", prefix, at.timestamp_millis()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("prod-789");
        assert_eq!(format!("{}", id), "prod-789");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("7")).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn test_order_id_generation() {
        let at = Utc.timestamp_millis_opt(1_718_000_000_123).unwrap();
        let id = OrderId::generate("ECO", at);
        assert_eq!(id.as_str(), "ECO-1718000000123");
    }
}
