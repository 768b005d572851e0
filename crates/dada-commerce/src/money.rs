//! Money type for representing monetary values.
//!
//! The Algerian dinar has no subunit in retail use, so amounts are whole
//! dinars held in an `i64`. All totals go through the checked operations;
//! floating point never touches a price.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// ISO 4217 code of the storefront currency.
pub const CURRENCY_CODE: &str = "DZD";

/// An amount of Algerian dinars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a new Money value from whole dinars.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero dinars.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in dinars.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add another amount, returning None on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtract another amount, returning None on overflow.
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Sum an iterator of amounts, returning None on overflow.
    pub fn try_sum(iter: impl IntoIterator<Item = Money>) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// Format with thousands separators and the dinar sign (e.g., "8,500 دج").
    pub fn display(&self) -> String {
        dada_i18n::format_price(self.0)
    }

    /// Format with thousands separators only (e.g., "8,500").
    pub fn display_amount(&self) -> String {
        dada_i18n::format_amount(self.0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money(self.0 * factor)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(8500);
        let b = Money::new(400);
        assert_eq!(a + b, Money::new(8900));
        assert_eq!(a - b, Money::new(8100));
        assert_eq!(a * 2, Money::new(17000));
    }

    #[test]
    fn test_checked_overflow() {
        let max = Money::new(i64::MAX);
        assert_eq!(max.checked_add(Money::new(1)), None);
        assert_eq!(max.checked_mul(2), None);
        assert_eq!(Money::new(2500).checked_mul(3), Some(Money::new(7500)));
    }

    #[test]
    fn test_try_sum() {
        let total = Money::try_sum([Money::new(2500), Money::new(3500), Money::new(6000)]);
        assert_eq!(total, Some(Money::new(12000)));
        assert_eq!(Money::try_sum([Money::new(i64::MAX), Money::new(1)]), None);
        assert_eq!(Money::try_sum(std::iter::empty()), Some(Money::zero()));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(12400).display(), "12,400 دج");
        assert_eq!(Money::new(400).display_amount(), "400");
        assert_eq!(format!("{}", Money::new(1500)), "1,500 دج");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::new(8500)).unwrap();
        assert_eq!(json, "8500");
        let back: Money = serde_json::from_str("200").unwrap();
        assert_eq!(back, Money::new(200));
    }
}
