//! Checkout module.
//!
//! Contains the shop session and orders, the delivery form, wilayas, shipping,
//! the WhatsApp order message and the checkout flow.

mod address;
mod flow;
mod message;
mod order;
mod session;
mod shipping;
mod wilaya;

pub use address::{CheckoutForm, CustomerInfo};
pub use flow::{CheckoutError, CheckoutFlow, CheckoutState, HandoffError, MessageHandoff, PlacedOrder};
pub use message::{whatsapp_link, OrderSummary, SummaryLine, WHATSAPP_BASE_URL};
pub use order::{Order, OrderStatus};
pub use session::ShopSession;
pub use shipping::{ShippingRates, ShippingType};
pub use wilaya::{Wilaya, WilayaDirectory};
