//! The order message sent to the store over WhatsApp.

use crate::cart::{Cart, LineItem};
use crate::checkout::{CustomerInfo, Order, ShippingType};
use crate::error::CommerceError;
use crate::money::Money;
use dada_i18n::{format_price, t, t_with, Language, LocalizedText};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// One product line of the message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: String,
    /// "flavor / size" when a variant was chosen.
    pub variant: Option<String>,
    pub quantity: i64,
    pub subtotal: Money,
}

impl SummaryLine {
    fn from_item(item: &LineItem, language: Language) -> Result<Self, CommerceError> {
        Ok(Self {
            name: item.name.get(language).to_string(),
            variant: item.variant_label(),
            quantity: item.quantity,
            subtotal: item.subtotal()?,
        })
    }
}

/// Everything the order message shows, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub language: Language,
    pub store_name: String,
    pub customer: CustomerInfo,
    pub shipping_type: ShippingType,
    pub lines: Vec<SummaryLine>,
    pub subtotal: Money,
    pub shipping_cost: Money,
    pub total: Money,
}

impl OrderSummary {
    /// Summarise a cart that is about to become an order.
    pub fn from_cart(
        cart: &Cart,
        customer: &CustomerInfo,
        shipping_type: ShippingType,
        shipping_cost: Money,
        store_name: &LocalizedText,
        language: Language,
    ) -> Result<Self, CommerceError> {
        Self::build(
            cart.items(),
            customer,
            shipping_type,
            shipping_cost,
            store_name,
            language,
        )
    }

    /// Summarise an order that was already placed.
    pub fn from_order(
        order: &Order,
        store_name: &LocalizedText,
        language: Language,
    ) -> Result<Self, CommerceError> {
        Self::build(
            order.items(),
            order.customer(),
            order.shipping_type(),
            order.shipping_cost(),
            store_name,
            language,
        )
    }

    fn build(
        items: &[LineItem],
        customer: &CustomerInfo,
        shipping_type: ShippingType,
        shipping_cost: Money,
        store_name: &LocalizedText,
        language: Language,
    ) -> Result<Self, CommerceError> {
        let lines = items
            .iter()
            .map(|item| SummaryLine::from_item(item, language))
            .collect::<Result<Vec<_>, _>>()?;
        let subtotal =
            Money::try_sum(lines.iter().map(|l| l.subtotal)).ok_or(CommerceError::Overflow)?;
        let total = subtotal
            .checked_add(shipping_cost)
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            language,
            store_name: store_name.get(language).to_string(),
            customer: customer.clone(),
            shipping_type,
            lines,
            subtotal,
            shipping_cost,
            total,
        })
    }

    /// Render the message text.
    pub fn render(&self) -> String {
        let lang = self.language;
        let field = |key: &str, value: &str| format!("{}: {}\n", t(lang, key), value);

        let mut out = t_with(lang, "message.header", &[("storeName", self.store_name.as_str())]);
        out.push_str("\n\n");
        out.push_str(&field("message.name", &self.customer.full_name));
        out.push_str(&field("message.phone", &self.customer.phone));
        out.push_str(&field("message.wilaya", &self.customer.wilaya));
        out.push_str(&field("message.commune", &self.customer.commune));
        out.push_str(&field("message.shipping", self.shipping_type.label(lang)));
        out.push('\n');

        out.push_str(t(lang, "message.products"));
        out.push_str(":\n");
        let lines: Vec<String> = self
            .lines
            .iter()
            .map(|line| {
                let variant = line
                    .variant
                    .as_deref()
                    .map(|v| format!(" [{v}]"))
                    .unwrap_or_default();
                format!(
                    "- {}{} ({}x) - {}",
                    line.name,
                    variant,
                    line.quantity,
                    format_price(line.subtotal.amount())
                )
            })
            .collect();
        out.push_str(&lines.join("\n"));
        out.push_str("\n\n");

        out.push_str(&field("message.subtotal", &self.subtotal.display()));
        out.push_str(&field("message.shipping.cost", &self.shipping_cost.display()));
        out.push_str(&format!("{}: {}", t(lang, "message.total"), self.total.display()));
        out
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Deep link that opens a WhatsApp chat with `phone` and `text` pre-filled.
///
/// Everything but digits is stripped from the phone number.
pub fn whatsapp_link(phone: &str, text: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("{WHATSAPP_BASE_URL}/{digits}?text={}", encode_uri_component(text))
}

/// Percent-encode like a browser's `encodeURIComponent`, which leaves
/// `!'()*` unescaped on top of the unreserved set.
fn encode_uri_component(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
