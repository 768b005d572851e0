//! Localization for the GYM DADA storefront.
//!
//! The storefront speaks two languages: Arabic (the default, right-to-left)
//! and French. This crate provides:
//!
//! - **Language**: the language tag and its text direction
//! - **LocalizedText**: a bilingual `{ ar, fr }` value attached to catalog data
//! - **Table**: the static string table with lookup-with-fallback
//! - **Format**: dinar amount formatting shared by the cart and the checkout
//!
//! # Example
//!
//! ```rust
//! use dada_i18n::{t, t_with, Language};
//!
//! assert_eq!(t(Language::Fr, "cart.title"), "Panier d'achat");
//! assert_eq!(t(Language::Fr, "no.such.key"), "no.such.key");
//! assert_eq!(
//!     t_with(Language::Fr, "footer.copyright", &[("year", "2025"), ("storeName", "GYM DADA STORE")]),
//!     "© 2025 GYM DADA STORE. Tous droits réservés."
//! );
//! ```

mod format;
mod language;
mod table;
mod text;

pub use format::{format_amount, format_price, CURRENCY_SIGN};
pub use language::{Language, TextDirection};
pub use table::{has_key, t, t_with};
pub use text::LocalizedText;
