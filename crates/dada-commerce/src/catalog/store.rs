//! The catalog store: one owned instance holding every catalog collection.

use super::{
    seed, Advertisement, AdvertisementUpdate, Category, CategoryUpdate, Page, PageDraft,
    PageUpdate, Product, ProductUpdate, SettingsUpdate, StoreSettings,
};
use crate::checkout::ShippingRates;
use crate::error::CommerceError;
use crate::ids::{AdvertisementId, CategoryId, PageId, ProductId};
use crate::search::{ProductQuery, SearchResults};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Products, categories, advertisements, pages and settings for one storefront.
///
/// Collections keep insertion order, which is the order the storefront lists
/// them in. Updates and deletes of unknown ids change nothing and return `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<Category>,
    advertisements: Vec<Advertisement>,
    pages: Vec<Page>,
    settings: StoreSettings,
}

impl CatalogStore {
    /// An empty catalog with the given settings.
    pub fn new(settings: StoreSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// The launch catalog: four categories, six products, two advertisements.
    pub fn seeded() -> Self {
        Self {
            products: seed::products(),
            categories: seed::categories(),
            advertisements: seed::advertisements(),
            pages: Vec::new(),
            settings: seed::settings(),
        }
    }

    // Products

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product, failing with `ProductNotFound`.
    pub fn require_product(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.product(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn add_product(&mut self, product: Product) -> Result<ProductId, CommerceError> {
        if self.product(&product.id).is_some() {
            return Err(CommerceError::DuplicateId(product.id.into_inner()));
        }
        if self.category(&product.category_id).is_none() {
            warn!(
                product_id = %product.id,
                category_id = %product.category_id,
                "Product added to unknown category"
            );
        }
        let id = product.id.clone();
        self.products.push(product);
        info!(product_id = %id, "Product added");
        Ok(id)
    }

    pub fn update_product(&mut self, id: &ProductId, update: ProductUpdate) -> bool {
        match self.products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                update.apply(product);
                info!(product_id = %id, "Product updated");
                true
            }
            None => false,
        }
    }

    pub fn delete_product(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        let removed = self.products.len() != before;
        if removed {
            info!(product_id = %id, "Product deleted");
        }
        removed
    }

    // Categories

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn add_category(&mut self, category: Category) -> Result<CategoryId, CommerceError> {
        if self.category(&category.id).is_some() {
            return Err(CommerceError::DuplicateId(category.id.into_inner()));
        }
        let id = category.id.clone();
        self.categories.push(category);
        info!(category_id = %id, "Category added");
        Ok(id)
    }

    pub fn update_category(&mut self, id: &CategoryId, update: CategoryUpdate) -> bool {
        match self.categories.iter_mut().find(|c| &c.id == id) {
            Some(category) => {
                update.apply(category);
                info!(category_id = %id, "Category updated");
                true
            }
            None => false,
        }
    }

    /// Remove a category. Its products stay in the catalog and become orphans.
    pub fn delete_category(&mut self, id: &CategoryId) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| &c.id != id);
        if self.categories.len() == before {
            return false;
        }

        let orphaned = self.products_in_category(id).count();
        if orphaned > 0 {
            warn!(category_id = %id, orphaned, "Category deleted with products still assigned");
        } else {
            info!(category_id = %id, "Category deleted");
        }
        true
    }

    // Advertisements

    pub fn advertisements(&self) -> &[Advertisement] {
        &self.advertisements
    }

    pub fn advertisement(&self, id: &AdvertisementId) -> Option<&Advertisement> {
        self.advertisements.iter().find(|a| &a.id == id)
    }

    pub fn add_advertisement(&mut self, ad: Advertisement) -> Result<AdvertisementId, CommerceError> {
        if self.advertisement(&ad.id).is_some() {
            return Err(CommerceError::DuplicateId(ad.id.into_inner()));
        }
        let id = ad.id.clone();
        self.advertisements.push(ad);
        info!(advertisement_id = %id, "Advertisement added");
        Ok(id)
    }

    pub fn update_advertisement(&mut self, id: &AdvertisementId, update: AdvertisementUpdate) -> bool {
        match self.advertisements.iter_mut().find(|a| &a.id == id) {
            Some(ad) => {
                update.apply(ad);
                true
            }
            None => false,
        }
    }

    pub fn delete_advertisement(&mut self, id: &AdvertisementId) -> bool {
        let before = self.advertisements.len();
        self.advertisements.retain(|a| &a.id != id);
        self.advertisements.len() != before
    }

    // Pages

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| &p.id == id)
    }

    pub fn add_page(&mut self, draft: PageDraft) -> Result<PageId, CommerceError> {
        draft.validate()?;
        let page = draft.into_page(Utc::now());
        let id = page.id.clone();
        info!(page_id = %id, slug = %page.slug, "Page added");
        self.pages.push(page);
        Ok(id)
    }

    pub fn update_page(&mut self, id: &PageId, update: PageUpdate) -> bool {
        match self.pages.iter_mut().find(|p| &p.id == id) {
            Some(page) => {
                update.apply(page, Utc::now());
                info!(page_id = %id, "Page updated");
                true
            }
            None => false,
        }
    }

    pub fn delete_page(&mut self, id: &PageId) -> bool {
        let before = self.pages.len();
        self.pages.retain(|p| &p.id != id);
        self.pages.len() != before
    }

    /// Published page with this slug. Drafts are not reachable by slug.
    pub fn page_by_slug(&self, slug: &str) -> Option<&Page> {
        self.published_pages().find(|p| p.slug == slug)
    }

    pub fn published_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|p| p.is_published)
    }

    pub fn footer_pages(&self) -> impl Iterator<Item = &Page> {
        self.published_pages().filter(|p| p.show_in_footer)
    }

    // Settings

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) {
        update.apply(&mut self.settings);
        info!("Store settings updated");
    }

    pub fn shipping_rates(&self) -> ShippingRates {
        self.settings.shipping_rates()
    }

    // Views

    pub fn products_in_category<'a>(
        &'a self,
        id: &'a CategoryId,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| &p.category_id == id)
    }

    /// Products whose old price is above the current price.
    pub fn special_offers(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_on_sale())
    }

    /// The first `limit` products in catalog order.
    pub fn best_sellers(&self, limit: usize) -> &[Product] {
        &self.products[..limit.min(self.products.len())]
    }

    /// Products pointing at a category that no longer exists.
    pub fn orphaned_products(&self) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(|p| self.category(&p.category_id).is_none())
    }

    pub fn search(&self, query: &ProductQuery) -> SearchResults<&Product> {
        query.execute(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::search::ProductFilter;
    use dada_i18n::LocalizedText;

    #[test]
    fn test_seeded_catalog() {
        let catalog = CatalogStore::seeded();
        assert_eq!(catalog.categories().len(), 4);
        assert_eq!(catalog.products().len(), 6);
        assert_eq!(catalog.advertisements().len(), 2);
        assert_eq!(catalog.settings().store_name.fr, "GYM DADA STORE");

        let whey = catalog.product(&ProductId::new("1")).unwrap();
        assert_eq!(whey.price, Money::new(8500));
        assert_eq!(whey.discount_percent(), Some(15));
        assert_eq!(whey.flavors.len(), 4);
        assert_eq!(catalog.orphaned_products().count(), 0);
    }

    #[test]
    fn test_add_duplicate_id_rejected() {
        let mut catalog = CatalogStore::seeded();
        let dup = Product::new(LocalizedText::same("Dup"), Money::new(1), CategoryId::new("1"))
            .with_id("1");
        assert_eq!(
            catalog.add_product(dup),
            Err(CommerceError::DuplicateId("1".to_string()))
        );
        assert_eq!(catalog.products().len(), 6);

        let cat = Category::new(LocalizedText::same("X"), "x", "#000").with_id("4");
        assert!(matches!(catalog.add_category(cat), Err(CommerceError::DuplicateId(_))));
    }

    #[test]
    fn test_unknown_id_updates_are_noops() {
        let mut catalog = CatalogStore::seeded();
        let ghost = ProductId::new("ghost");
        assert!(!catalog.update_product(&ghost, ProductUpdate::default()));
        assert!(!catalog.delete_product(&ghost));
        assert!(!catalog.delete_category(&CategoryId::new("ghost")));
        assert!(!catalog.update_advertisement(&AdvertisementId::new("9"), AdvertisementUpdate::default()));
        assert!(!catalog.delete_page(&PageId::new("9")));
        assert_eq!(catalog.products().len(), 6);
    }

    #[test]
    fn test_update_and_delete_product() {
        let mut catalog = CatalogStore::seeded();
        let id = ProductId::new("2");
        assert!(catalog.update_product(
            &id,
            ProductUpdate {
                in_stock: Some(false),
                ..Default::default()
            }
        ));
        assert!(!catalog.product(&id).unwrap().in_stock);

        assert!(catalog.delete_product(&id));
        assert!(catalog.product(&id).is_none());
        assert_eq!(catalog.products().len(), 5);
    }

    #[test]
    fn test_delete_category_orphans_products() {
        let mut catalog = CatalogStore::seeded();
        let apparel = CategoryId::new("3");
        assert!(catalog.delete_category(&apparel));

        let orphans: Vec<_> = catalog.orphaned_products().map(|p| p.id.as_str()).collect();
        assert_eq!(orphans, vec!["3", "6"]);
        assert_eq!(catalog.products().len(), 6);
    }

    #[test]
    fn test_views() {
        let catalog = CatalogStore::seeded();

        let supplements_id = CategoryId::new("2");
        let supplements: Vec<_> = catalog
            .products_in_category(&supplements_id)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(supplements, vec!["2", "5"]);

        let offers: Vec<_> = catalog.special_offers().map(|p| p.id.as_str()).collect();
        assert_eq!(offers, vec!["1", "5"]);

        assert_eq!(catalog.best_sellers(8).len(), 6);
        assert_eq!(catalog.best_sellers(2).len(), 2);
    }

    #[test]
    fn test_pages() {
        let mut catalog = CatalogStore::new(StoreSettings::default());
        let about = catalog
            .add_page(
                PageDraft::new(LocalizedText::new("من نحن", "À propos"), "About Us")
                    .in_footer(true),
            )
            .unwrap();
        catalog
            .add_page(PageDraft::new(LocalizedText::new("مسودة", "Brouillon"), "draft").published(false))
            .unwrap();

        assert_eq!(catalog.page(&about).unwrap().slug, "about-us");
        assert!(catalog.page_by_slug("about-us").is_some());
        assert!(catalog.page_by_slug("draft").is_none());
        assert_eq!(catalog.published_pages().count(), 1);
        assert_eq!(catalog.footer_pages().count(), 1);

        let bad = PageDraft::new(LocalizedText::new("", "Vide"), "empty");
        assert!(catalog.add_page(bad).is_err());
        assert_eq!(catalog.pages().len(), 2);

        assert!(catalog.update_page(
            &about,
            PageUpdate {
                show_in_footer: Some(false),
                ..Default::default()
            }
        ));
        assert_eq!(catalog.footer_pages().count(), 0);
    }

    #[test]
    fn test_settings_drive_shipping_rates() {
        let mut catalog = CatalogStore::seeded();
        catalog.update_settings(SettingsUpdate {
            home_delivery_price: Some(Money::new(600)),
            ..Default::default()
        });
        assert_eq!(catalog.shipping_rates().home, Money::new(600));
        assert_eq!(catalog.shipping_rates().office, Money::new(200));
    }

    #[test]
    fn test_search() {
        let catalog = CatalogStore::seeded();
        let results = catalog.search(
            &ProductQuery::new()
                .with_text("protein")
                .with_filter(ProductFilter::InStock),
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results.items[0].id.as_str(), "1");
    }
}
