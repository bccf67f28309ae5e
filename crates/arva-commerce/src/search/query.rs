//! The catalog query: filter composition and sorting.

use crate::catalog::{Category, Product};
use crate::money::Money;
use crate::search::FilterState;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Ordering rules for the listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Featured products first, best sellers next (default).
    #[default]
    Featured,
    /// New arrivals first.
    Newest,
    /// Price, low to high.
    PriceLowHigh,
    /// Price, high to low.
    PriceHighLow,
    /// Name, A-Z.
    Name,
    /// Highest rated first.
    Rating,
}

impl SortKey {
    /// Get the wire value used by the sort menu.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::PriceLowHigh => "price-low",
            SortKey::PriceHighLow => "price-high",
            SortKey::Name => "name",
            SortKey::Rating => "rating",
        }
    }

    /// Parse a wire value from the sort menu.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "featured" => Some(SortKey::Featured),
            "newest" => Some(SortKey::Newest),
            "price-low" => Some(SortKey::PriceLowHigh),
            "price-high" => Some(SortKey::PriceHighLow),
            "name" => Some(SortKey::Name),
            "rating" => Some(SortKey::Rating),
            _ => None,
        }
    }

    /// Label shown in the sort menu.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::Newest => "Newest",
            SortKey::PriceLowHigh => "Price: Low to High",
            SortKey::PriceHighLow => "Price: High to Low",
            SortKey::Name => "Name",
            SortKey::Rating => "Rating",
        }
    }

    /// Sort products in place.
    ///
    /// Every arm uses a stable sort, so products equal under the active
    /// comparator keep their relative feed order. The flag-based keys are
    /// explicit ranking tuples (false sorts before true), which keeps the
    /// partition orders transitive.
    pub fn sort(&self, products: &mut [Product]) {
        match self {
            SortKey::Featured => products.sort_by_key(|p| (!p.featured, !p.best_seller)),
            SortKey::Newest => products.sort_by_key(|p| !p.new_arrival),
            SortKey::PriceLowHigh => products.sort_by_key(|p| p.price.amount),
            SortKey::PriceHighLow => products.sort_by_key(|p| Reverse(p.price.amount)),
            SortKey::Name => products.sort_by_cached_key(|p| p.name.to_lowercase()),
            SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }
}

/// A catalog query: optional category restriction, filter state, and
/// sort key.
///
/// Applying a query is a pure function from the full product list to the
/// visible, ordered subset; the input is never mutated and re-applying
/// is always safe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogQuery {
    /// Restrict the listing to one category.
    pub category: Option<Category>,
    /// Narrowing criteria.
    pub filter: FilterState,
    /// Ordering rule.
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Create a query with no restrictions and the default sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.filter.set_price_range(min, max);
        self
    }

    /// Add a size to the selected set.
    pub fn with_size(mut self, size: &str) -> Self {
        self.filter.toggle_size(size);
        self
    }

    /// Add a color to the selected set.
    pub fn with_color(mut self, color: &str) -> Self {
        self.filter.toggle_color(color);
        self
    }

    /// Only show in-stock products.
    pub fn in_stock_only(mut self) -> Self {
        self.filter.in_stock_only = true;
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether a product passes the category restriction and every
    /// filter criterion.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        self.filter.matches(product)
    }

    /// Produce the visible subset in the requested order.
    ///
    /// Filters apply in a fixed order (category, price, size, color,
    /// stock), then the sort key orders the survivors.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut results: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        self.sort.sort(&mut results);
        results
    }
}
