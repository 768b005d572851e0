//! Cart pricing calculations.

use crate::error::CommerceError;
use crate::ids::LineItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Delivery cost, zero until a shipping type is chosen.
    pub shipping_total: Money,
    /// Subtotal plus shipping.
    pub grand_total: Money,
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Apply a delivery cost, replacing any earlier one.
    pub fn with_shipping(mut self, cost: Money) -> Result<Self, CommerceError> {
        self.shipping_total = cost;
        self.grand_total = self
            .subtotal
            .checked_add(cost)
            .ok_or(CommerceError::Overflow)?;
        Ok(self)
    }
}

/// Pricing for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    pub line_item_id: LineItemId,
    pub unit_price: Money,
    pub quantity: i64,
    /// unit_price × quantity
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_shipping_replaces_previous_cost() {
        let pricing = CartPricing {
            subtotal: Money::new(12000),
            shipping_total: Money::zero(),
            grand_total: Money::new(12000),
            line_items: vec![],
        };

        let home = pricing.with_shipping(Money::new(400)).unwrap();
        assert_eq!(home.grand_total, Money::new(12400));

        let office = home.with_shipping(Money::new(200)).unwrap();
        assert_eq!(office.shipping_total, Money::new(200));
        assert_eq!(office.grand_total, Money::new(12200));
    }

    #[test]
    fn test_with_shipping_overflow() {
        let pricing = CartPricing {
            subtotal: Money::new(i64::MAX),
            shipping_total: Money::zero(),
            grand_total: Money::new(i64::MAX),
            line_items: vec![],
        };
        assert_eq!(pricing.with_shipping(Money::new(1)), Err(CommerceError::Overflow));
    }
}
