//! Product types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are read-only once loaded; the cart captures price snapshots
/// at add time rather than referencing back into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Apparel category.
    pub category: Category,
    /// Current selling price.
    #[serde(with = "money::as_amount")]
    pub price: Money,
    /// Pre-discount price, if the product is on sale.
    #[serde(
        default,
        with = "money::as_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Money>,
    /// Ordered image URLs; the first is the listing image.
    pub images: Vec<String>,
    /// Full description.
    pub description: String,
    /// Sizes offered.
    pub sizes: Vec<String>,
    /// Colors offered.
    pub colors: Vec<String>,
    /// Shown in the featured section.
    pub featured: bool,
    /// Marked as a best seller.
    pub best_seller: bool,
    /// Marked as a new arrival.
    pub new_arrival: bool,
    /// Average review rating, 0-5.
    pub rating: f64,
    /// Number of reviews.
    pub review_count: u32,
    /// Available for purchase.
    pub in_stock: bool,
}

impl Product {
    /// Create a product with the given identity and price; everything
    /// else starts empty or false (in stock by default).
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: Category,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            price,
            original_price: None,
            images: Vec::new(),
            description: String::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            featured: false,
            best_seller: false,
            new_arrival: false,
            rating: 0.0,
            review_count: 0,
            in_stock: true,
        }
    }

    /// Check if this product is on sale (original price above current).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original.amount > self.price.amount)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|original| {
            if original.amount > self.price.amount {
                let savings = original.amount - self.price.amount;
                Some((savings as f64 / original.amount as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Check if the product offers the given size.
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check if the product offers the given color.
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// The listing image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        let mut product = Product::new(
            "1",
            "Essential Black Tee",
            Category::TShirts,
            Money::rupees(899),
        );
        product.original_price = Some(Money::rupees(1299));
        product.sizes = vec!["S".into(), "M".into(), "L".into()];
        product.colors = vec!["Black".into(), "White".into()];
        product.images = vec!["https://example.com/tee-front.jpg".into()];
        product
    }

    #[test]
    fn test_on_sale() {
        let product = tee();
        assert!(product.is_on_sale());

        let discount = product.discount_percentage().unwrap();
        assert!((discount - 30.79).abs() < 0.01);
    }

    #[test]
    fn test_not_on_sale_without_original_price() {
        let mut product = tee();
        product.original_price = None;
        assert!(!product.is_on_sale());
        assert!(product.discount_percentage().is_none());
    }

    #[test]
    fn test_offered_options() {
        let product = tee();
        assert!(product.offers_size("M"));
        assert!(!product.offers_size("XXL"));
        assert!(product.offers_color("Black"));
        assert!(!product.offers_color("Navy"));
    }

    #[test]
    fn test_feed_wire_format() {
        let json = r#"{
            "id": "3",
            "name": "Classic White Shirt",
            "category": "shirts",
            "price": 1899,
            "images": ["https://example.com/shirt.jpg"],
            "description": "Timeless white shirt.",
            "sizes": ["S", "M", "L"],
            "colors": ["White", "Light Blue"],
            "featured": false,
            "bestSeller": true,
            "newArrival": false,
            "rating": 4.7,
            "reviewCount": 67,
            "inStock": true
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "3");
        assert_eq!(product.category, Category::Shirts);
        assert_eq!(product.price, Money::rupees(1899));
        assert_eq!(product.original_price, None);
        assert!(product.best_seller);
    }

    #[test]
    fn test_primary_image() {
        let product = tee();
        assert_eq!(
            product.primary_image(),
            Some("https://example.com/tee-front.jpg")
        );

        let bare = Product::new("9", "Bare", Category::Shirts, Money::rupees(100));
        assert_eq!(bare.primary_image(), None);
    }
}
