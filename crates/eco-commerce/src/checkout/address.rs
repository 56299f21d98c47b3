//! Shipping address.

use serde::{Deserialize, Serialize};

/// Where an order ships to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    /// Street address.
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl ShippingAddress {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }

    /// Format as multi-line.
    pub fn multi_line(&self) -> String {
        [
            self.full_name(),
            self.address.clone(),
            format!("{}, {} {}", self.city, self.state, self.zip_code),
        ]
        .join("\n")
    }
}
