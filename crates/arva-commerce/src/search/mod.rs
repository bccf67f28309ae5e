//! Catalog query engine.
//!
//! Pure filtering and sorting of the product list for the listing view.

mod filter;
mod query;

pub use filter::{FilterState, DEFAULT_PRICE_CEILING};
pub use query::{CatalogQuery, SortKey};
