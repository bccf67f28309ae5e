//! Listing filter state.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Default upper bound of the price range filter, in whole rupees.
pub const DEFAULT_PRICE_CEILING: i64 = 5000;

/// The shopper's current narrowing criteria for the listing view.
///
/// Size and color selections are inclusive unions: a product passes when
/// it offers *any* selected value, and an empty selection means no
/// restriction at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    /// Lower price bound, inclusive.
    pub price_min: Money,
    /// Upper price bound, inclusive.
    pub price_max: Money,
    /// Selected sizes.
    pub sizes: Vec<String>,
    /// Selected colors.
    pub colors: Vec<String>,
    /// Only show in-stock products.
    pub in_stock_only: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            price_min: Money::rupees(0),
            price_max: Money::rupees(DEFAULT_PRICE_CEILING),
            sizes: Vec::new(),
            colors: Vec::new(),
            in_stock_only: false,
        }
    }
}

impl FilterState {
    /// Set the price range.
    pub fn set_price_range(&mut self, min: Money, max: Money) {
        self.price_min = min;
        self.price_max = max;
    }

    /// Price bounds normalized so min <= max.
    ///
    /// An inverted range is treated as a transposition mistake and
    /// swapped rather than matching nothing.
    pub fn price_bounds(&self) -> (i64, i64) {
        if self.price_min.amount <= self.price_max.amount {
            (self.price_min.amount, self.price_max.amount)
        } else {
            (self.price_max.amount, self.price_min.amount)
        }
    }

    /// Toggle a size selection on or off.
    pub fn toggle_size(&mut self, size: &str) {
        if let Some(pos) = self.sizes.iter().position(|s| s == size) {
            self.sizes.remove(pos);
        } else {
            self.sizes.push(size.to_string());
        }
    }

    /// Toggle a color selection on or off.
    pub fn toggle_color(&mut self, color: &str) {
        if let Some(pos) = self.colors.iter().position(|c| c == color) {
            self.colors.remove(pos);
        } else {
            self.colors.push(color.to_string());
        }
    }

    /// Reset all criteria to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check whether a product passes every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        let (min, max) = self.price_bounds();
        if product.price.amount < min || product.price.amount > max {
            return false;
        }

        if !self.sizes.is_empty() && !self.sizes.iter().any(|s| product.offers_size(s)) {
            return false;
        }

        if !self.colors.is_empty() && !self.colors.iter().any(|c| product.offers_color(c)) {
            return false;
        }

        if self.in_stock_only && !product.in_stock {
            return false;
        }

        true
    }
}
