//! Money type for representing monetary values.
//!
//! Catalog prices are whole, minor-unit-free amounts (2499 means ₹2,499), so
//! every amount is an `i64` and all arithmetic stays exact. Arithmetic
//! saturates at the `i64` bounds instead of panicking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Digit grouping used when formatting amounts in this currency.
    pub fn grouping(&self) -> DigitGrouping {
        match self {
            Currency::INR => DigitGrouping::Indian,
            _ => DigitGrouping::Western,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How digits are grouped with separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGrouping {
    /// Groups of three: 1,234,567.
    Western,
    /// Last three digits, then groups of two: 12,34,567.
    Indian,
}

/// A whole monetary amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero.
    pub const ZERO: Money = Money(0);

    /// Create a new amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The raw amount.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }

    /// A fraction of this amount expressed in basis points (1800 = 18%),
    /// rounded half away from zero to a whole unit.
    pub fn basis_points(&self, bps: u32) -> Money {
        let scaled = i128::from(self.0) * i128::from(bps);
        let half = if scaled < 0 { -5_000 } else { 5_000 };
        let rounded = (scaled + half) / 10_000;
        Money(rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Format with the currency symbol, e.g. "₹6,997".
    pub fn display(&self, currency: Currency) -> String {
        format!("{}{}", currency.symbol(), self.display_amount(currency))
    }

    /// Format without the symbol, e.g. "6,997".
    pub fn display_amount(&self, currency: Currency) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let grouped = group_digits(&digits, currency.grouping());
        if self.0 < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let group = match grouping {
        DigitGrouping::Western => 3,
        DigitGrouping::Indian => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(Currency::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(2499);
        let b = Money::new(1999);
        assert_eq!((a * 2 + b).amount(), 6997);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::new(100), Money::new(250), Money::new(5)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::new(355));
    }

    #[test]
    fn test_money_saturates() {
        let m = Money::new(i64::MAX);
        assert_eq!((m + Money::new(1)).amount(), i64::MAX);
        assert_eq!(m.times(3).amount(), i64::MAX);
    }

    #[test]
    fn test_basis_points_rounding() {
        // 18% of 6997 = 1259.46
        assert_eq!(Money::new(6997).basis_points(1800), Money::new(1259));
        // 18% of 2750 = 495.0
        assert_eq!(Money::new(2750).basis_points(1800), Money::new(495));
        // 18% of 25 = 4.5 rounds up
        assert_eq!(Money::new(25).basis_points(1800), Money::new(5));
        assert_eq!(Money::new(-25).basis_points(1800), Money::new(-5));
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(Money::new(999).display(Currency::INR), "\u{20b9}999");
        assert_eq!(Money::new(6997).display(Currency::INR), "\u{20b9}6,997");
        assert_eq!(Money::new(100000).display_amount(Currency::INR), "1,00,000");
        assert_eq!(
            Money::new(12345678).display_amount(Currency::INR),
            "1,23,45,678"
        );
    }

    #[test]
    fn test_western_grouping() {
        assert_eq!(Money::new(1234567).display(Currency::USD), "$1,234,567");
        assert_eq!(Money::new(-4500).display_amount(Currency::EUR), "-4,500");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
