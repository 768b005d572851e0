//! The shop session: one customer's cart and the orders placed from it.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::checkout::{CustomerInfo, Order, OrderStatus, ShippingType};
use crate::error::CommerceError;
use crate::ids::{LineItemId, OrderId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Cart plus append-only order list.
///
/// Orders live only as long as the session; nothing here is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopSession {
    cart: Cart,
    orders: Vec<Order>,
}

impl ShopSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, product: &Product, flavor: Option<&str>, size: Option<&str>) -> LineItemId {
        self.cart.add(product, flavor, size)
    }

    pub fn update_quantity(&mut self, line_item_id: &LineItemId, quantity: i64) -> bool {
        self.cart.update_quantity(line_item_id, quantity)
    }

    pub fn remove_from_cart(&mut self, line_item_id: &LineItemId) -> bool {
        self.cart.remove(line_item_id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart_total(&self) -> Result<Money, CommerceError> {
        self.cart.total()
    }

    pub fn cart_items_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Turn the cart into a pending order and empty the cart.
    pub fn create_order(
        &mut self,
        customer: CustomerInfo,
        shipping_type: ShippingType,
        shipping_cost: Money,
    ) -> Result<OrderId, CommerceError> {
        self.create_order_with(customer, shipping_type, shipping_cost, |_| Ok(()))
    }

    /// Build the order, run `hook` on it, and only then record it and clear the cart.
    ///
    /// If the hook fails the order is dropped and the cart is left as it was.
    pub fn create_order_with<E, F>(
        &mut self,
        customer: CustomerInfo,
        shipping_type: ShippingType,
        shipping_cost: Money,
        hook: F,
    ) -> Result<OrderId, E>
    where
        E: From<CommerceError>,
        F: FnOnce(&Order) -> Result<(), E>,
    {
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart.into());
        }

        let order = Order::new(self.cart.items().to_vec(), customer, shipping_type, shipping_cost)?;
        hook(&order)?;

        let id = order.id().clone();
        info!(
            order_id = %id,
            total = order.total().amount(),
            items = order.item_count(),
            shipping = %shipping_type,
            "Order created"
        );
        self.orders.push(order);
        self.cart.clear();
        Ok(id)
    }

    /// Overwrite an order's status. Any status may follow any other.
    pub fn update_order_status(&mut self, order_id: &OrderId, status: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|o| o.id() == order_id) {
            Some(order) => {
                let from = order.status();
                order.set_status(status);
                info!(order_id = %order_id, %from, to = %status, "Order status changed");
                true
            }
            None => false,
        }
    }

    /// Orders in creation order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == order_id)
    }

    /// Orders with the given status (all when `None`), newest first.
    pub fn orders_by_status(&self, status: Option<OrderStatus>) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders
            .iter()
            .rev()
            .filter(|o| status.map_or(true, |s| o.status() == s))
            .collect();
        orders.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        orders
    }

    /// Number of orders in each status.
    pub fn status_counts(&self) -> Vec<(OrderStatus, usize)> {
        OrderStatus::ALL
            .into_iter()
            .map(|s| (s, self.orders.iter().filter(|o| o.status() == s).count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;
    use dada_i18n::LocalizedText;

    fn product(id: &str, price: i64) -> Product {
        Product::new(LocalizedText::same(id), Money::new(price), CategoryId::new("1")).with_id(id)
    }

    fn customer() -> CustomerInfo {
        CustomerInfo::new("Karim", "0555000000", "الجزائر", "الجزائر الوسطى")
    }

    #[test]
    fn test_create_order_snapshots_and_clears() {
        let mut session = ShopSession::new();
        session.add_to_cart(&product("1", 8500), None, None);
        session.add_to_cart(&product("1", 8500), None, None);

        let id = session
            .create_order(customer(), ShippingType::Home, Money::new(400))
            .unwrap();

        let order = session.order(&id).unwrap();
        assert_eq!(order.total(), Money::new(17400));
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].quantity, 2);
        assert!(session.cart().is_empty());
        assert_eq!(session.cart_items_count(), 0);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let mut session = ShopSession::new();
        let result = session.create_order(customer(), ShippingType::Office, Money::new(200));
        assert_eq!(result, Err(CommerceError::EmptyCart));
        assert!(session.orders().is_empty());
    }

    #[test]
    fn test_failed_hook_leaves_state_untouched() {
        let mut session = ShopSession::new();
        session.add_to_cart(&product("2", 3500), None, Some("300جرام"));
        let before = session.cart().clone();

        let result: Result<OrderId, CommerceError> = session.create_order_with(
            customer(),
            ShippingType::Home,
            Money::new(400),
            |_| Err(CommerceError::ValidationError("hand-off failed".into())),
        );

        assert!(result.is_err());
        assert!(session.orders().is_empty());
        assert_eq!(session.cart(), &before);
    }

    #[test]
    fn test_hook_sees_the_order() {
        let mut session = ShopSession::new();
        session.add_to_cart(&product("3", 2500), None, None);

        let mut seen = None;
        let id = session
            .create_order_with::<CommerceError, _>(customer(), ShippingType::Office, Money::new(200), |order| {
                seen = Some(order.total());
                Ok(())
            })
            .unwrap();

        assert_eq!(seen, Some(Money::new(2700)));
        assert_eq!(session.order(&id).unwrap().total(), Money::new(2700));
    }

    #[test]
    fn test_update_order_status() {
        let mut session = ShopSession::new();
        session.add_to_cart(&product("4", 1500), None, None);
        let id = session
            .create_order(customer(), ShippingType::Home, Money::new(400))
            .unwrap();

        assert!(session.update_order_status(&id, OrderStatus::Delivered));
        assert!(session.update_order_status(&id, OrderStatus::Pending));
        assert_eq!(session.order(&id).unwrap().status(), OrderStatus::Pending);
        assert_eq!(session.order(&id).unwrap().total(), Money::new(1900));

        assert!(!session.update_order_status(&OrderId::new("missing"), OrderStatus::Shipped));
    }

    #[test]
    fn test_admin_views() {
        let mut session = ShopSession::new();
        let mut ids = Vec::new();
        for price in [1000, 2000, 3000] {
            session.add_to_cart(&product("p", price), None, None);
            ids.push(
                session
                    .create_order(customer(), ShippingType::Home, Money::new(400))
                    .unwrap(),
            );
        }
        session.update_order_status(&ids[0], OrderStatus::Shipped);

        let all = session.orders_by_status(None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id(), &ids[2]);
        assert_eq!(all[2].id(), &ids[0]);

        let pending = session.orders_by_status(Some(OrderStatus::Pending));
        assert_eq!(pending.len(), 2);

        let counts = session.status_counts();
        assert_eq!(counts[0], (OrderStatus::Pending, 2));
        assert_eq!(counts[2], (OrderStatus::Shipped, 1));
    }
}
