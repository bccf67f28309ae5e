//! The storefront session: one shopper's cart, filters, and sign-in.

use crate::config::StoreConfig;
use arva_auth::{AuthError, AuthProvider, MockAuth, User};
use arva_commerce::cart::{Cart, CartPricing, LineItem};
use arva_commerce::catalog::{Catalog, Category, Product};
use arva_commerce::error::CommerceError;
use arva_commerce::ids::ProductId;
use arva_commerce::money::Money;
use arva_commerce::search::{CatalogQuery, SortKey};
use tracing::{debug, info};

/// One shopping session.
///
/// Owns the catalog, the cart ledger, the listing query state, and the
/// auth capability; the UI layer drives it through the command methods
/// and renders the view methods. There is no global state: the composing
/// application creates a session and passes it wherever it is needed.
pub struct Storefront {
    catalog: Catalog,
    config: StoreConfig,
    cart: Cart,
    query: CatalogQuery,
    auth: Box<dyn AuthProvider>,
}

impl Storefront {
    /// Create a session over the given catalog with mock authentication.
    pub fn new(catalog: Catalog, config: StoreConfig) -> Self {
        Self {
            catalog,
            config,
            cart: Cart::new(),
            query: CatalogQuery::new(),
            auth: Box::new(MockAuth::new()),
        }
    }

    /// Substitute the authentication capability.
    pub fn with_auth(mut self, auth: impl AuthProvider + 'static) -> Self {
        self.auth = Box::new(auth);
        self
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The current listing query.
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    // ── Cart commands ──

    /// Add one unit of a product in the chosen size and color.
    pub fn add_to_cart(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
    ) -> Result<LineItem, CommerceError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;

        let line = self.cart.add(product, size, color)?;
        debug!(
            product = %product_id,
            size,
            color,
            quantity = line.quantity,
            "added to cart"
        );
        Ok(line)
    }

    /// Set a line's quantity; zero or less removes it. Returns whether a
    /// line was changed.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        let changed = self.cart.update_quantity(product_id, size, color, quantity)?;
        debug!(product = %product_id, size, color, quantity, changed, "updated quantity");
        Ok(changed)
    }

    /// Remove a line from the cart. Returns whether anything was removed.
    pub fn remove_from_cart(&mut self, product_id: &ProductId, size: &str, color: &str) -> bool {
        let removed = self.cart.remove(product_id, size, color);
        debug!(product = %product_id, size, color, removed, "removed from cart");
        removed
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("cleared cart");
    }

    // ── Cart views ──

    /// Current cart lines, in insertion order.
    pub fn cart_lines(&self) -> &[LineItem] {
        self.cart.lines()
    }

    /// Total item count for the cart badge.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Cart subtotal.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.cart.subtotal()
    }

    /// The checkout summary breakdown for the current cart.
    pub fn order_summary(&self) -> Result<CartPricing, CommerceError> {
        self.cart.pricing(&self.config.checkout)
    }

    /// How much more the shopper must spend for free shipping, if the
    /// order doesn't already qualify.
    pub fn amount_to_free_shipping(&self) -> Result<Option<Money>, CommerceError> {
        let subtotal = self.cart.subtotal()?;
        Ok(self.config.checkout.amount_to_free_shipping(&subtotal))
    }

    // ── Listing commands ──

    /// Restrict the listing to one category, or show everything.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.query.category = category;
    }

    /// Set the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    /// Set the price range filter.
    pub fn set_price_range(&mut self, min: Money, max: Money) {
        self.query.filter.set_price_range(min, max);
    }

    /// Toggle a size selection.
    pub fn toggle_size(&mut self, size: &str) {
        self.query.filter.toggle_size(size);
    }

    /// Toggle a color selection.
    pub fn toggle_color(&mut self, color: &str) {
        self.query.filter.toggle_color(color);
    }

    /// Only show in-stock products.
    pub fn set_in_stock_only(&mut self, in_stock_only: bool) {
        self.query.filter.in_stock_only = in_stock_only;
    }

    /// Reset all filters to their defaults. The category restriction and
    /// sort key are view state, not filters, and are kept.
    pub fn clear_filters(&mut self) {
        self.query.filter.reset();
        debug!("cleared filters");
    }

    // ── Listing views ──

    /// The filtered, sorted product sequence for the active view.
    pub fn visible_products(&self) -> Vec<Product> {
        self.query.apply(self.catalog.products())
    }

    /// Look up a product by ID.
    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.catalog.get(product_id)
    }

    // ── Auth ──

    /// Sign in.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        let user = self.auth.login(email, password)?;
        info!(email = %user.email, "signed in");
        Ok(user)
    }

    /// Create an account and sign in.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<&User, AuthError> {
        let user = self.auth.register(name, email, password)?;
        info!(email = %user.email, "registered");
        Ok(user)
    }

    /// Sign out.
    pub fn logout(&mut self) {
        self.auth.logout();
        info!("signed out");
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.auth.current_user()
    }

    /// Check whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }
}
