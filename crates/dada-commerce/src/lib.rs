//! Storefront domain types and logic for GYM DADA STORE.
//!
//! This crate holds everything the storefront views read from and dispatch to:
//!
//! - **Catalog**: Products, categories, advertisements, static pages, store settings
//! - **Search**: Category/text/price filters, sorting, pagination
//! - **Cart**: Line items keyed by product and variant selection, totals
//! - **Checkout**: Orders, the shop session, the delivery form, the WhatsApp
//!   order message and the `Form → Submitting → Placed` flow
//!
//! # Example
//!
//! ```rust
//! use dada_commerce::prelude::*;
//!
//! let catalog = CatalogStore::seeded();
//! let mut session = ShopSession::new();
//!
//! let whey = catalog.product(&ProductId::new("1")).unwrap();
//! session.add_to_cart(whey, Some("فانيلا"), None);
//! session.add_to_cart(whey, Some("فانيلا"), None);
//! assert_eq!(session.cart_total().unwrap(), Money::new(17000));
//!
//! let customer = CustomerInfo::new("Amine B.", "0555000000", "Alger", "Bab Ezzouar");
//! let rates = catalog.settings().shipping_rates();
//! let order_id = session
//!     .create_order(customer, ShippingType::Home, rates.price_for(ShippingType::Home))
//!     .unwrap();
//!
//! assert_eq!(session.order(&order_id).unwrap().total(), Money::new(17400));
//! assert!(session.cart().is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use dada_i18n::{Language, LocalizedText};

    // Catalog
    pub use crate::catalog::{
        Advertisement, AdvertisementUpdate, CatalogStore, Category, CategoryUpdate, Page,
        PageDraft, PageUpdate, Product, ProductUpdate, SettingsUpdate, StoreSettings,
    };

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, LineItemPricing};

    // Checkout
    pub use crate::checkout::{
        whatsapp_link, CheckoutError, CheckoutFlow, CheckoutForm, CheckoutState,
        CustomerInfo, HandoffError, MessageHandoff, Order, OrderStatus, OrderSummary,
        PlacedOrder, ShippingRates, ShippingType, ShopSession, Wilaya, WilayaDirectory,
    };

    // Search
    pub use crate::search::{Pagination, ProductFilter, ProductQuery, SearchResults, SortOption};
}
