//! Order types.

use crate::cart::LineItem;
use crate::checkout::{CustomerInfo, ShippingType};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use dada_i18n::{t, Language};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, waiting for the store to call the customer back.
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match self {
            OrderStatus::Pending => t(language, "order.status.pending"),
            OrderStatus::Confirmed => t(language, "order.status.confirmed"),
            OrderStatus::Shipped => t(language, "order.status.shipped"),
            OrderStatus::Delivered => t(language, "order.status.delivered"),
        }
    }

    /// The usual next step. Status changes are not restricted to it.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown order status: {s}"))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed order.
///
/// Items, shipping and total are fixed when the order is created; only the
/// status moves afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    id: OrderId,
    items: Vec<LineItem>,
    customer: CustomerInfo,
    shipping_type: ShippingType,
    shipping_cost: Money,
    total: Money,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot the given lines into a pending order.
    pub(crate) fn new(
        items: Vec<LineItem>,
        customer: CustomerInfo,
        shipping_type: ShippingType,
        shipping_cost: Money,
    ) -> Result<Self, CommerceError> {
        let lines = items
            .iter()
            .map(LineItem::subtotal)
            .collect::<Result<Vec<_>, _>>()?;
        let total = Money::try_sum(lines)
            .and_then(|subtotal| subtotal.checked_add(shipping_cost))
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            id: OrderId::generate(),
            items,
            customer,
            shipping_type,
            shipping_cost,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }

    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn shipping_type(&self) -> ShippingType {
        self.shipping_type
    }

    pub fn shipping_cost(&self) -> Money {
        self.shipping_cost
    }

    /// Products plus shipping.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Products only.
    pub fn subtotal(&self) -> Money {
        self.total - self.shipping_cost
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Last six characters of the id, as shown in order lists.
    pub fn short_ref(&self) -> &str {
        let id = self.id.as_str();
        let start = id
            .char_indices()
            .rev()
            .nth(5)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &id[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Product;
    use crate::ids::CategoryId;
    use dada_i18n::LocalizedText;

    fn lines() -> Vec<LineItem> {
        let whey = Product::new(LocalizedText::same("Whey"), Money::new(8500), CategoryId::new("1"));
        let tee = Product::new(LocalizedText::same("Tee"), Money::new(2500), CategoryId::new("3"));
        let mut cart = Cart::new();
        cart.add(&whey, None, None);
        cart.add(&whey, None, None);
        cart.add(&tee, None, Some("L"));
        cart.items().to_vec()
    }

    fn customer() -> CustomerInfo {
        CustomerInfo::new("Sara M.", "0661000000", "وهران", "وهران")
    }

    #[test]
    fn test_new_order_totals() {
        let order = Order::new(lines(), customer(), ShippingType::Office, Money::new(200)).unwrap();
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.subtotal(), Money::new(19500));
        assert_eq!(order.total(), Money::new(19700));
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.shipping_type(), ShippingType::Office);
    }

    #[test]
    fn test_status_change_keeps_total() {
        let mut order = Order::new(lines(), customer(), ShippingType::Home, Money::new(400)).unwrap();
        let total = order.total();
        let items = order.items().to_vec();

        order.set_status(OrderStatus::Delivered);
        order.set_status(OrderStatus::Pending);
        assert_eq!(order.total(), total);
        assert_eq!(order.items(), items.as_slice());
    }

    #[test]
    fn test_order_overflow() {
        let mut items = lines();
        items[0].quantity = i64::MAX;
        let result = Order::new(items, customer(), ShippingType::Home, Money::new(400));
        assert_eq!(result, Err(CommerceError::Overflow));
    }

    #[test]
    fn test_short_ref() {
        let mut order = Order::new(lines(), customer(), ShippingType::Home, Money::new(400)).unwrap();
        order.id = OrderId::new("1718000000000042");
        assert_eq!(order.short_ref(), "000042");
        order.id = OrderId::new("abc");
        assert_eq!(order.short_ref(), "abc");
    }

    #[test]
    fn test_status_progression_and_labels() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Confirmed));
        assert_eq!(OrderStatus::Delivered.next(), None);
        assert!(OrderStatus::Delivered.is_terminal());
        assert_eq!(OrderStatus::Shipped.label(Language::Ar), "تم الشحن");
        assert_eq!(OrderStatus::Pending.label(Language::Fr), "En attente");
        assert_eq!("confirmed".parse::<OrderStatus>(), Ok(OrderStatus::Confirmed));
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");
    }
}
