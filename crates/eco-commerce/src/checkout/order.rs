//! Placed orders.

use std::fmt;

use crate::cart::{CartLineItem, OrderSummary};
use crate::checkout::ShippingAddress;
use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card number reduced to its last four digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaskedCard(String);

impl MaskedCard {
    /// Mask a card number. Non-digit characters are ignored.
    pub fn from_number(number: &str) -> Self {
        let digits: Vec<char> = number.chars().filter(char::is_ascii_digit).collect();
        let start = digits.len().saturating_sub(4);
        Self(digits[start..].iter().collect())
    }

    /// The last four digits, or fewer if the number was shorter.
    pub fn last_four(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaskedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**** **** **** {}", self.0)
    }
}

/// A confirmed order. Lives only as long as the caller keeps it.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order number, e.g. `ECO-1718000000000`.
    pub order_number: OrderId,
    /// Contact email.
    pub email: String,
    pub shipping_address: ShippingAddress,
    /// Cart lines at the time of checkout.
    pub items: Vec<CartLineItem>,
    pub summary: OrderSummary,
    pub card: MaskedCard,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Total quantity across lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_masking() {
        let card = MaskedCard::from_number("4242 4242 4242 1234");
        assert_eq!(card.last_four(), "1234");
        assert_eq!(card.to_string(), "**** **** **** 1234");
    }

    #[test]
    fn test_short_card_number() {
        assert_eq!(MaskedCard::from_number("12").last_four(), "12");
        assert_eq!(MaskedCard::from_number("").last_four(), "");
    }
}
