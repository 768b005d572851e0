//! Product catalog module.
//!
//! Contains the catalog entities and the [`CatalogStore`] that owns them.

mod advertisement;
mod category;
mod page;
mod product;
mod seed;
mod settings;
mod store;

pub use advertisement::{Advertisement, AdvertisementUpdate};
pub use category::{Category, CategoryUpdate};
pub use page::{normalize_slug, slugify, Page, PageDraft, PageUpdate};
pub use product::{Product, ProductUpdate};
pub use settings::{SettingsUpdate, StoreSettings};
pub use store::CatalogStore;
