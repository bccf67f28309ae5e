//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of apparel categories carried by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    TShirts,
    Shirts,
    Hoodies,
}

impl Category {
    /// All categories, in merchandising order.
    pub const ALL: [Category; 3] = [Category::TShirts, Category::Shirts, Category::Hoodies];

    /// Get the category as its wire string (e.g., "t-shirts").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TShirts => "t-shirts",
            Category::Shirts => "shirts",
            Category::Hoodies => "hoodies",
        }
    }

    /// Parse a category from its wire string. Matching is exact.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "t-shirts" => Some(Category::TShirts),
            "shirts" => Some(Category::Shirts),
            "hoodies" => Some(Category::Hoodies),
            _ => None,
        }
    }

    /// Human-readable title for listing pages.
    pub fn title(&self) -> &'static str {
        match self {
            Category::TShirts => "T-Shirts",
            Category::Shirts => "Shirts",
            Category::Hoodies => "Hoodies",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
