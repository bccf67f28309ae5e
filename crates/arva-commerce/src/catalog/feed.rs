//! The catalog: the store's full product set, loaded whole from a feed.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// The full, static set of purchasable products.
///
/// Loaded once at startup from a JSON feed and never mutated. Feed order
/// is preserved; it is the tie-break order for every stable sort in the
/// query engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an already-parsed product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON feed: an array of product records.
    pub fn from_json(feed: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(feed)?;
        Ok(Self { products })
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in feed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in feed order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in the given category, in feed order.
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products.iter().filter(|p| p.category == category).collect()
    }

    /// Products flagged for the featured section.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products flagged as best sellers.
    pub fn best_sellers(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.best_seller).collect()
    }

    /// Products flagged as new arrivals.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.new_arrival).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn sample() -> Catalog {
        let mut tee = Product::new("1", "Tee", Category::TShirts, Money::rupees(899));
        tee.featured = true;
        tee.best_seller = true;

        let mut hoodie = Product::new("2", "Hoodie", Category::Hoodies, Money::rupees(2499));
        hoodie.new_arrival = true;

        let mut shirt = Product::new("3", "Shirt", Category::Shirts, Money::rupees(1899));
        shirt.best_seller = true;

        Catalog::new(vec![tee, hoodie, shirt])
    }

    #[test]
    fn test_lookup() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(&ProductId::new("2")).unwrap().name, "Hoodie");
        assert!(catalog.get(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_category_query() {
        let catalog = sample();
        let hoodies = catalog.by_category(Category::Hoodies);
        assert_eq!(hoodies.len(), 1);
        assert_eq!(hoodies[0].name, "Hoodie");
    }

    #[test]
    fn test_flag_queries() {
        let catalog = sample();
        assert_eq!(catalog.featured().len(), 1);
        assert_eq!(catalog.best_sellers().len(), 2);
        assert_eq!(catalog.new_arrivals().len(), 1);
    }

    #[test]
    fn test_from_json() {
        let feed = r#"[
            {
                "id": "1",
                "name": "Essential Black Tee",
                "category": "t-shirts",
                "price": 899,
                "originalPrice": 1299,
                "images": [],
                "description": "",
                "sizes": ["S", "M"],
                "colors": ["Black"],
                "featured": true,
                "bestSeller": true,
                "newArrival": false,
                "rating": 4.8,
                "reviewCount": 124,
                "inStock": true
            }
        ]"#;

        let catalog = Catalog::from_json(feed).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.products()[0].is_on_sale());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Catalog::from_json("not a feed").is_err());
    }
}
