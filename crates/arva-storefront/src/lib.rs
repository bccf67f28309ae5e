//! Session layer composing the ARVA storefront core.
//!
//! Ties together the commerce domain ([`arva_commerce`]) and the mock
//! auth capability ([`arva_auth`]) behind the command surface the UI
//! layer drives: add/update/remove cart lines, adjust listing filters
//! and sort, sign in and out, and read back the derived views.
//!
//! # Example
//!
//! ```
//! use arva_storefront::{bundled_catalog, StoreConfig, Storefront};
//! use arva_commerce::ids::ProductId;
//!
//! let mut store = Storefront::new(bundled_catalog()?, StoreConfig::default());
//! store.add_to_cart(&ProductId::new("1"), "M", "Black")?;
//!
//! let summary = store.order_summary()?;
//! println!("total: {}", summary.grand_total);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod session;

pub use config::StoreConfig;
pub use session::Storefront;

use arva_commerce::catalog::Catalog;
use arva_commerce::error::CommerceError;

/// The store's product feed, bundled at build time.
const PRODUCT_FEED: &str = include_str!("../data/products.json");

/// Load the bundled ARVA product catalog.
pub fn bundled_catalog() -> Result<Catalog, CommerceError> {
    Catalog::from_json(PRODUCT_FEED)
}
