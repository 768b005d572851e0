//! Search query builder.

use crate::catalog::Product;
use crate::search::{Pagination, ProductFilter, SearchResults};
use dada_i18n::Language;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z in the query language.
    NameAsc,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::NameAsc => "name_asc",
        }
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|opt| opt.as_str() == s)
            .ok_or_else(|| format!("unknown sort option: {s}"))
    }
}

/// A product search: filters, sort and a page window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Filters to apply; a product must match all of them.
    pub filters: Vec<ProductFilter>,
    pub sort: SortOption,
    /// Language used for name ordering.
    pub language: Language,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductQuery {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sort: SortOption::Featured,
            language: Language::default(),
            page: 1,
            per_page: 24,
        }
    }

    /// Add a text filter unless the query is blank.
    pub fn with_text(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.trim().is_empty() {
            self.filters.push(ProductFilter::Text(q));
        }
        self
    }

    pub fn with_filter(mut self, filter: ProductFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set pagination; page is at least 1, page size is clamped to 1..=100.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.per_page.max(1))
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Run the query over a product list, preserving list order for `Featured`.
    pub fn execute<'a, I>(&self, products: I) -> SearchResults<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut hits: Vec<&Product> = products.into_iter().filter(|p| self.matches(p)).collect();

        match self.sort {
            SortOption::Featured => {}
            SortOption::PriceAsc => hits.sort_by_key(|p| p.price),
            SortOption::PriceDesc => hits.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOption::NameAsc => hits.sort_by_cached_key(|p| p.name.get(self.language).to_lowercase()),
        }

        let total = hits.len() as i64;
        let pagination = Pagination::new(self.page, self.per_page, total);
        let skip = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(pagination.per_page).unwrap_or(usize::MAX);
        let items = hits.into_iter().skip(skip).take(take).collect();

        SearchResults::new(items, pagination)
    }
}
