//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// A size or color was chosen that the product does not offer.
    #[error("product {product} does not offer {kind} \"{value}\"")]
    InvalidSelection {
        product: String,
        kind: &'static str,
        value: String,
    },

    /// Invalid quantity.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed per line.
    #[error("quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Currency mismatch.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Malformed product feed.
    #[error("malformed product feed: {0}")]
    Feed(#[from] serde_json::Error),
}
