//! Order summary calculations.

use crate::cart::CartState;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A tax rate in basis points (1800 = 18%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// The storefront's standard 18% rate.
    pub const STANDARD: TaxRate = TaxRate(1800);

    /// Create a rate from basis points.
    pub const fn from_basis_points(bps: u32) -> Self {
        Self(bps)
    }

    pub fn basis_points(&self) -> u32 {
        self.0
    }

    /// Rate as a percentage, for display.
    pub fn percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Tax due on an amount, rounded half-up to a whole unit.
    pub fn apply(&self, amount: Money) -> Money {
        amount.basis_points(self.0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Totals shown on the cart and checkout pages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Cart total before shipping and tax.
    pub subtotal: Money,
    /// Shipping cost. Shipping is free on all orders.
    pub shipping: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// The rate the tax was computed with.
    pub tax_rate: TaxRate,
    /// subtotal + shipping + tax.
    pub grand_total: Money,
}

impl OrderSummary {
    /// Summarise a cart.
    pub fn for_cart(cart: &CartState, tax_rate: TaxRate) -> Self {
        Self::for_subtotal(cart.total(), tax_rate)
    }

    /// Summarise a bare subtotal.
    pub fn for_subtotal(subtotal: Money, tax_rate: TaxRate) -> Self {
        let shipping = Money::ZERO;
        let tax = tax_rate.apply(subtotal);
        Self {
            subtotal,
            shipping,
            tax,
            tax_rate,
            grand_total: subtotal + shipping + tax,
        }
    }

    /// Check if shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};

    #[test]
    fn test_summary_for_cart() {
        let shirt = Product::new("1", "Shirt", Money::new(2499), Category::Clothing);
        let bottle = Product::new("2", "Bottle", Money::new(1999), Category::Accessories);
        let cart = CartState::new().add_items(&shirt, 2).add_item(&bottle);

        let summary = OrderSummary::for_cart(&cart, TaxRate::STANDARD);
        assert_eq!(summary.subtotal, Money::new(6997));
        assert_eq!(summary.tax, Money::new(1259));
        assert_eq!(summary.grand_total, Money::new(8256));
        assert!(summary.has_free_shipping());
    }

    #[test]
    fn test_empty_cart_summary() {
        let summary = OrderSummary::for_cart(&CartState::new(), TaxRate::default());
        assert_eq!(summary.grand_total, Money::ZERO);
    }

    #[test]
    fn test_custom_rate() {
        let rate = TaxRate::from_basis_points(500);
        assert!((rate.percent() - 5.0).abs() < f64::EPSILON);
        let summary = OrderSummary::for_subtotal(Money::new(1000), rate);
        assert_eq!(summary.tax, Money::new(50));
        assert_eq!(summary.grand_total, Money::new(1050));
    }
}
