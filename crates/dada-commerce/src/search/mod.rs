//! Search module.
//!
//! Contains product filters, sorting and pagination over the in-memory catalog.

mod filter;
mod query;
mod results;

pub use filter::ProductFilter;
pub use query::{ProductQuery, SortOption};
pub use results::{Pagination, SearchResults};
