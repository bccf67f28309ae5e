//! Cart and line item types.

use crate::cart::{CartPricing, CheckoutConfig, LinePricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_LINE: i64 = 99;

/// A line item in the cart.
///
/// Identity is the (product, size, color) triple: the same product in two
/// sizes is two lines. The unit price is captured at add time and never
/// re-fetched from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price snapshot from add time.
    pub unit_price: Money,
    /// Listing image snapshot from add time.
    pub image: Option<String>,
    /// Chosen size.
    pub size: String,
    /// Chosen color.
    pub color: String,
    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl LineItem {
    fn new(product: &Product, size: String, color: String) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.primary_image().map(str::to_string),
            size,
            color,
            quantity: 1,
        }
    }

    /// Check whether this line is the given selection.
    pub fn is_selection(&self, product_id: &ProductId, size: &str, color: &str) -> bool {
        &self.product_id == product_id && self.size == size && self.color == color
    }

    /// Total for this line (unit price x quantity).
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// The shopping cart ledger for one session.
///
/// Holds the authoritative set of line items and derives totals from
/// them. No I/O and no side effects beyond its own state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<LineItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            currency: Currency::default(),
        }
    }

    /// Add one unit of a product in the chosen size and color.
    ///
    /// If a line with the same (product, size, color) already exists its
    /// quantity is incremented; otherwise a new line is inserted with the
    /// product's current price as the unit-price snapshot. Returns the
    /// updated line.
    ///
    /// The selection must be one the product actually offers; an
    /// undeclared size or color fails with `InvalidSelection`.
    pub fn add(
        &mut self,
        product: &Product,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<LineItem, CommerceError> {
        let size = size.into();
        let color = color.into();

        if !product.offers_size(&size) {
            return Err(CommerceError::InvalidSelection {
                product: product.id.to_string(),
                kind: "size",
                value: size,
            });
        }
        if !product.offers_color(&color) {
            return Err(CommerceError::InvalidSelection {
                product: product.id.to_string(),
                kind: "color",
                value: color,
            });
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.is_selection(&product.id, &size, &color))
        {
            let quantity = line.quantity.checked_add(1).ok_or(CommerceError::Overflow)?;
            if quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            line.quantity = quantity;
            return Ok(line.clone());
        }

        let line = LineItem::new(product, size, color);
        self.lines.push(line.clone());
        Ok(line)
    }

    /// Set a line's quantity.
    ///
    /// A quantity <= 0 removes the line. Returns `Ok(false)` if no line
    /// matches the selection; updates and removals of unknown lines are
    /// deliberate no-ops.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove(product_id, size, color));
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.is_selection(product_id, size, color))
        {
            line.quantity = quantity;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a line from the cart. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId, size: &str, color: &str) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| !l.is_selection(product_id, size, color));
        self.lines.len() < len_before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total item count (sum of quantities). Used for badge display.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a selection, if present.
    pub fn get(&self, product_id: &ProductId, size: &str, color: &str) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.is_selection(product_id, size, color))
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Sum of (unit price x quantity) over all lines.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let mut totals = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            totals.push(line.line_total()?);
        }
        Money::try_sum(totals.iter(), self.currency).ok_or(CommerceError::Overflow)
    }

    /// Derive the full checkout breakdown from the given configuration.
    ///
    /// Shipping is free above the configured threshold; tax is rounded to
    /// the nearest whole unit. Pure with respect to the cart: only the
    /// subtotal and the configuration feed into the result.
    pub fn pricing(&self, config: &CheckoutConfig) -> Result<CartPricing, CommerceError> {
        let mut lines = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            lines.push(LinePricing {
                product_id: line.product_id.clone(),
                size: line.size.clone(),
                color: line.color.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
                total: line.line_total()?,
            });
        }

        let subtotal = self.subtotal()?;
        let shipping_total = config.shipping_for(&subtotal);
        let tax_total = config.tax_for(&subtotal);
        let grand_total = subtotal
            .try_add(&shipping_total)
            .and_then(|t| t.try_add(&tax_total))
            .ok_or_else(|| CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: config.shipping_fee.currency.code().to_string(),
            })?;

        Ok(CartPricing {
            subtotal,
            shipping_total,
            tax_total,
            grand_total,
            lines,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
