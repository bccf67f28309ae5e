//! Checkout pricing: configuration and the derived breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Checkout parameters.
///
/// These are configuration inputs, not constants: the composing
/// application may load them from a config file or use the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Orders strictly above this subtotal ship free.
    pub free_shipping_threshold: Money,
    /// Flat shipping fee below the threshold.
    pub shipping_fee: Money,
    /// Tax rate applied to the subtotal (e.g., 0.18 for 18% GST).
    pub tax_rate: f64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::rupees(999),
            shipping_fee: Money::rupees(99),
            tax_rate: 0.18,
        }
    }
}

impl CheckoutConfig {
    /// Shipping charge for the given subtotal.
    pub fn shipping_for(&self, subtotal: &Money) -> Money {
        if subtotal.amount > self.free_shipping_threshold.amount {
            Money::zero(self.shipping_fee.currency)
        } else {
            self.shipping_fee
        }
    }

    /// Tax for the given subtotal, rounded to the nearest whole unit.
    pub fn tax_for(&self, subtotal: &Money) -> Money {
        subtotal.multiply_decimal(self.tax_rate)
    }

    /// How much more the shopper must spend to reach free shipping.
    ///
    /// `None` once the subtotal already ships free.
    pub fn amount_to_free_shipping(&self, subtotal: &Money) -> Option<Money> {
        if subtotal.amount > self.free_shipping_threshold.amount {
            None
        } else {
            self.free_shipping_threshold.try_subtract(subtotal)
        }
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping charge (zero above the free-shipping threshold).
    pub shipping_total: Money,
    /// Tax on the subtotal.
    pub tax_total: Money,
    /// Final total (subtotal + shipping + tax).
    pub grand_total: Money,
    /// Per-line breakdown.
    pub lines: Vec<LinePricing>,
}

impl CartPricing {
    /// Check if this order ships free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping_total.is_zero()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Product on the line.
    pub product_id: ProductId,
    /// Chosen size.
    pub size: String,
    /// Chosen color.
    pub color: String,
    /// Unit price snapshot.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Line total (unit price x quantity).
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_threshold_is_strict() {
        let config = CheckoutConfig::default();

        // Exactly at the threshold still pays shipping.
        let at = Money::rupees(999);
        assert_eq!(config.shipping_for(&at), Money::rupees(99));

        let above = Money::rupees(1000);
        assert!(config.shipping_for(&above).is_zero());
    }

    #[test]
    fn test_tax_rounds_to_nearest_unit() {
        let config = CheckoutConfig::default();
        assert_eq!(config.tax_for(&Money::rupees(850)), Money::rupees(153));
        assert_eq!(config.tax_for(&Money::rupees(2499)), Money::rupees(450));
    }

    #[test]
    fn test_amount_to_free_shipping() {
        let config = CheckoutConfig::default();

        let subtotal = Money::rupees(850);
        assert_eq!(
            config.amount_to_free_shipping(&subtotal),
            Some(Money::rupees(149))
        );

        let subtotal = Money::rupees(1200);
        assert_eq!(config.amount_to_free_shipping(&subtotal), None);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = CheckoutConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: CheckoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
