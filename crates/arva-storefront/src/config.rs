//! Store configuration.

use anyhow::{Context, Result};
use arva_commerce::cart::CheckoutConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Storefront configuration file.
///
/// Everything has a default matching the live store, so a missing or
/// partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Store display name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Checkout parameters.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            checkout: CheckoutConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Load config from a TOML or JSON file, chosen by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let json = path.extension().is_some_and(|ext| ext == "json");
        Self::parse(&content, json)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            serde_json::from_str(content).context("invalid JSON config")
        } else {
            toml::from_str(content).context("invalid TOML config")
        }
    }
}

fn default_store_name() -> String {
    "ARVA".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arva_commerce::money::Money;

    #[test]
    fn test_defaults_match_live_store() {
        let config = StoreConfig::default();
        assert_eq!(config.name, "ARVA");
        assert_eq!(config.checkout.free_shipping_threshold, Money::rupees(999));
        assert_eq!(config.checkout.shipping_fee, Money::rupees(99));
        assert!((config.checkout.tax_rate - 0.18).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            name = "ARVA Outlet"

            [checkout]
            tax_rate = 0.12

            [checkout.free_shipping_threshold]
            amount = 1499
            currency = "INR"

            [checkout.shipping_fee]
            amount = 49
            currency = "INR"
        "#;

        let config = StoreConfig::parse(toml, false).unwrap();
        assert_eq!(config.name, "ARVA Outlet");
        assert_eq!(config.checkout.free_shipping_threshold, Money::rupees(1499));
        assert_eq!(config.checkout.shipping_fee, Money::rupees(49));
        assert!((config.checkout.tax_rate - 0.12).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "name": "ARVA",
            "checkout": {
                "free_shipping_threshold": { "amount": 999, "currency": "INR" },
                "shipping_fee": { "amount": 99, "currency": "INR" },
                "tax_rate": 0.18
            }
        }"#;

        let config = StoreConfig::parse(json, true).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config = StoreConfig::parse("name = \"ARVA\"", false).unwrap();
        assert_eq!(config.checkout, CheckoutConfig::default());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(StoreConfig::parse("{ not valid", true).is_err());
        assert!(StoreConfig::parse("= nope", false).is_err());
    }
}
