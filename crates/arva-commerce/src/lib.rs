//! Commerce domain types and logic for the ARVA storefront.
//!
//! This crate provides the in-session core of the store:
//!
//! - **Catalog**: products, categories, and the feed-loaded catalog
//! - **Cart**: the shopping cart ledger with line-item merging and
//!   checkout pricing
//! - **Search**: the pure filter/sort engine behind the listing view
//!
//! # Example
//!
//! ```
//! use arva_commerce::prelude::*;
//!
//! let mut tee = Product::new("1", "Essential Black Tee", Category::TShirts, Money::rupees(899));
//! tee.sizes = vec!["M".into()];
//! tee.colors = vec!["Black".into()];
//!
//! let mut cart = Cart::new();
//! cart.add(&tee, "M", "Black")?;
//! cart.add(&tee, "M", "Black")?;
//!
//! let pricing = cart.pricing(&CheckoutConfig::default())?;
//! assert_eq!(pricing.subtotal, Money::rupees(1798));
//! # Ok::<(), arva_commerce::CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartPricing, CheckoutConfig, LineItem, LinePricing};

    // Search
    pub use crate::search::{CatalogQuery, FilterState, SortKey};
}
