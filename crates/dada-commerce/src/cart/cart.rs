//! Cart and line item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{LineItemId, ProductId};
use crate::money::Money;
use dada_i18n::LocalizedText;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A shopping cart.
///
/// Holds at most one line per (product, flavor, size) selection. A line
/// without a flavor is a different line from one with any flavor, and the
/// same goes for sizes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product with the given variant selection.
    ///
    /// An existing line with the same selection is bumped by one; otherwise a
    /// new line with quantity 1 is appended. Returns the line's id.
    pub fn add(&mut self, product: &Product, flavor: Option<&str>, size: Option<&str>) -> LineItemId {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.is_same_selection(&product.id, flavor, size))
        {
            existing.quantity = existing.quantity.saturating_add(1);
            debug!(
                line_item_id = %existing.id,
                product_id = %product.id,
                quantity = existing.quantity,
                "Cart line incremented"
            );
            return existing.id.clone();
        }

        let item = LineItem::from_product(product, flavor, size);
        let id = item.id.clone();
        debug!(line_item_id = %id, product_id = %product.id, ?flavor, ?size, "Cart line added");
        self.items.push(item);
        id
    }

    /// Set a line's quantity. Zero or less removes the line.
    ///
    /// Returns `false` when no line has this id.
    pub fn update_quantity(&mut self, line_item_id: &LineItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(line_item_id);
        }

        match self.items.iter_mut().find(|i| &i.id == line_item_id) {
            Some(item) => {
                item.quantity = quantity;
                debug!(line_item_id = %line_item_id, quantity, "Cart quantity updated");
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns `false` when no line has this id.
    pub fn remove(&mut self, line_item_id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != line_item_id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(line_item_id = %line_item_id, "Cart line removed");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.items.clear();
        debug!("Cart cleared");
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let lines = self
            .items
            .iter()
            .map(LineItem::subtotal)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(lines).ok_or(CommerceError::Overflow)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, line_item_id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == line_item_id)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Per-line and overall pricing, without shipping.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        let line_items = self
            .items
            .iter()
            .map(|item| {
                Ok(LineItemPricing {
                    line_item_id: item.id.clone(),
                    unit_price: item.price,
                    quantity: item.quantity,
                    subtotal: item.subtotal()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let subtotal = Money::try_sum(line_items.iter().map(|l| l.subtotal))
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            shipping_total: Money::zero(),
            grand_total: subtotal,
            line_items,
        })
    }
}

/// A line in the cart: a snapshot of the product at the time it was added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Line id, distinct from the product id.
    pub id: LineItemId,
    pub product_id: ProductId,
    pub name: LocalizedText,
    /// Unit price when added.
    pub price: Money,
    pub image: String,
    /// Always at least 1 while the line is in a cart.
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_flavor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
}

impl LineItem {
    fn from_product(product: &Product, flavor: Option<&str>, size: Option<&str>) -> Self {
        Self {
            id: LineItemId::generate(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
            selected_flavor: flavor.map(str::to_string),
            selected_size: size.map(str::to_string),
        }
    }

    /// Price × quantity.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.price
            .checked_mul(self.quantity)
            .ok_or(CommerceError::Overflow)
    }

    /// Whether this line holds exactly this product and variant selection.
    pub fn is_same_selection(&self, product_id: &ProductId, flavor: Option<&str>, size: Option<&str>) -> bool {
        &self.product_id == product_id
            && self.selected_flavor.as_deref() == flavor
            && self.selected_size.as_deref() == size
    }

    /// "flavor / size" when any variant was chosen.
    pub fn variant_label(&self) -> Option<String> {
        match (self.selected_flavor.as_deref(), self.selected_size.as_deref()) {
            (None, None) => None,
            (Some(f), None) => Some(f.to_string()),
            (None, Some(s)) => Some(s.to_string()),
            (Some(f), Some(s)) => Some(format!("{f} / {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;

    fn whey() -> Product {
        Product::new(
            LocalizedText::new("واي بروتين", "Whey Protein"),
            Money::new(8500),
            CategoryId::new("1"),
        )
        .with_id("1")
        .with_flavors(["شوكولا", "فانيلا"])
    }

    fn creatine() -> Product {
        Product::new(
            LocalizedText::new("كرياتين", "Créatine"),
            Money::new(3500),
            CategoryId::new("2"),
        )
        .with_id("2")
    }

    #[test]
    fn test_cart_starts_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total().unwrap(), Money::zero());
    }

    #[test]
    fn test_add_same_selection_merges() {
        let mut cart = Cart::new();
        let a = cart.add(&whey(), Some("فانيلا"), None);
        let b = cart.add(&whey(), Some("فانيلا"), None);

        assert_eq!(a, b);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().unwrap(), Money::new(17000));
    }

    #[test]
    fn test_absent_selection_is_distinct() {
        let mut cart = Cart::new();
        let plain = cart.add(&whey(), None, None);
        let vanilla = cart.add(&whey(), Some("فانيلا"), None);
        let choco = cart.add(&whey(), Some("شوكولا"), None);
        let sized = cart.add(&whey(), Some("شوكولا"), Some("1كغ"));

        assert_eq!(cart.len(), 4);
        assert_ne!(plain, vanilla);
        assert_ne!(vanilla, choco);
        assert_ne!(choco, sized);
        assert_ne!(plain.as_str(), "1");
    }

    #[test]
    fn test_line_snapshot() {
        let mut cart = Cart::new();
        let id = cart.add(&whey(), Some("فانيلا"), Some("2.5كغ"));
        let line = cart.get(&id).unwrap();

        assert_eq!(line.product_id, ProductId::new("1"));
        assert_eq!(line.price, Money::new(8500));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.variant_label().as_deref(), Some("فانيلا / 2.5كغ"));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        let id = cart.add(&creatine(), None, None);

        assert!(cart.update_quantity(&id, 5));
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total().unwrap(), Money::new(17500));

        assert!(!cart.update_quantity(&LineItemId::new("nope"), 3));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        let id = cart.add(&creatine(), None, None);
        cart.add(&whey(), None, None);

        assert!(cart.update_quantity(&id, 0));
        assert!(cart.get(&id).is_none());
        assert_eq!(cart.len(), 1);

        let other = cart.items()[0].id.clone();
        assert!(cart.update_quantity(&other, -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add(&creatine(), None, None);
        assert!(!cart.remove(&LineItemId::new("nope")));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new();
        let whey_line = cart.add(&whey(), None, None);
        cart.add(&creatine(), None, None);
        cart.update_quantity(&whey_line, 2);

        let pricing = cart.pricing().unwrap();
        assert_eq!(pricing.subtotal, Money::new(20500));
        assert_eq!(pricing.grand_total, Money::new(20500));
        assert_eq!(pricing.line_items.len(), 2);
        assert_eq!(pricing.line_items[0].subtotal, Money::new(17000));

        let with_shipping = pricing.with_shipping(Money::new(400)).unwrap();
        assert_eq!(with_shipping.grand_total, Money::new(20900));
    }

    #[test]
    fn test_total_overflow_is_error() {
        let mut cart = Cart::new();
        let id = cart.add(&whey(), None, None);
        cart.update_quantity(&id, i64::MAX);
        assert_eq!(cart.total(), Err(CommerceError::Overflow));
        assert!(cart.pricing().is_err());
    }
}
