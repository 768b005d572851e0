//! Product filter predicates.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A predicate over catalog products. A query keeps products matching all of its filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ProductFilter {
    /// Products in a single category.
    Category(CategoryId),
    /// Only products that can be ordered.
    InStock,
    /// Only products with a real discount.
    OnSale,
    /// Case-insensitive match on the name, in either language.
    Text(String),
    /// Inclusive price bounds.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
}

impl ProductFilter {
    pub fn category(id: impl Into<CategoryId>) -> Self {
        ProductFilter::Category(id.into())
    }

    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        ProductFilter::PriceRange { min, max }
    }

    pub fn text(query: impl Into<String>) -> Self {
        ProductFilter::Text(query.into())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::Category(id) => product.category_id == *id,
            ProductFilter::InStock => product.in_stock,
            ProductFilter::OnSale => product.is_on_sale(),
            ProductFilter::Text(query) => {
                let query = query.trim();
                query.is_empty() || product.name.contains_ignore_case(query)
            }
            ProductFilter::PriceRange { min, max } => {
                min.map_or(true, |min| product.price >= min)
                    && max.map_or(true, |max| product.price <= max)
            }
        }
    }
}
