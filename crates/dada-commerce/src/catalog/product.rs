//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use dada_i18n::LocalizedText;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: LocalizedText,
    /// Full description.
    pub description: LocalizedText,
    /// How to take or wear the product.
    pub usage: LocalizedText,
    /// Current price.
    pub price: Money,
    /// Previous price, shown struck through when higher than `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Money>,
    /// Image URL.
    pub image: String,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Flavor variant labels.
    #[serde(default)]
    pub flavors: Vec<String>,
    /// Size variant labels.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Whether the product can be ordered.
    pub in_stock: bool,
}

impl Product {
    /// Create a new in-stock product with a generated id.
    pub fn new(name: LocalizedText, price: Money, category_id: CategoryId) -> Self {
        Self {
            id: ProductId::generate(),
            name,
            description: LocalizedText::default(),
            usage: LocalizedText::default(),
            price,
            old_price: None,
            image: String::new(),
            category_id,
            flavors: Vec::new(),
            sizes: Vec::new(),
            in_stock: true,
        }
    }

    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: LocalizedText) -> Self {
        self.description = description;
        self
    }

    pub fn with_usage(mut self, usage: LocalizedText) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_old_price(mut self, old_price: Money) -> Self {
        self.old_price = Some(old_price);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_flavors<I, S>(mut self, flavors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flavors = flavors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// The old price, only when it actually represents a discount.
    pub fn compare_at_price(&self) -> Option<Money> {
        self.old_price.filter(|old| *old > self.price)
    }

    /// Check if this product is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price().is_some()
    }

    /// Discount off the old price, rounded to the nearest whole percent.
    ///
    /// `None` when the product is not on sale or the amounts are too large to compute.
    pub fn discount_percent(&self) -> Option<i64> {
        let old = self.compare_at_price()?.amount();
        let savings = old.checked_sub(self.price.amount())?;
        savings
            .checked_mul(100)?
            .checked_add(old / 2)?
            .checked_div(old)
    }

    pub fn has_flavors(&self) -> bool {
        !self.flavors.is_empty()
    }

    pub fn has_sizes(&self) -> bool {
        !self.sizes.is_empty()
    }
}

/// Partial update of a product; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub usage: Option<LocalizedText>,
    pub price: Option<Money>,
    /// `Some(None)` clears the old price.
    pub old_price: Option<Option<Money>>,
    pub image: Option<String>,
    pub category_id: Option<CategoryId>,
    pub flavors: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub in_stock: Option<bool>,
}

impl ProductUpdate {
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(usage) = self.usage {
            product.usage = usage;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(old_price) = self.old_price {
            product.old_price = old_price;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(category_id) = self.category_id {
            product.category_id = category_id;
        }
        if let Some(flavors) = self.flavors {
            product.flavors = flavors;
        }
        if let Some(sizes) = self.sizes {
            product.sizes = sizes;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
    }
}
