//! Home screen state: product list, loading flag and detail view.

use cartwheel_core::{Product, ProductId};
use tracing::{debug, error, instrument};

use super::ProductSource;
use crate::cart::{CartChange, CartStore};

/// State behind the catalog (home) screen.
#[derive(Debug, Clone)]
pub struct CatalogScreen {
    products: Vec<Product>,
    loading: bool,
    selected: Option<Product>,
}

impl Default for CatalogScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogScreen {
    /// A screen that has not fetched yet (loading).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            selected: None,
        }
    }

    /// Fetch the product list once.
    ///
    /// On failure the error is logged and the list is left empty. Either way
    /// the screen stops loading. Returns the number of products now shown.
    #[instrument(skip(self, source))]
    pub async fn mount<S: ProductSource>(&mut self, source: &S) -> usize {
        self.loading = true;
        self.selected = None;

        match source.fetch_products().await {
            Ok(products) => {
                debug!(count = products.len(), "catalog loaded");
                self.products = products;
            }
            Err(e) => {
                error!(error = %e, "Error fetching products");
                self.products.clear();
            }
        }

        self.loading = false;
        self.products.len()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a loaded product.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Open the detail view for `id`. Returns `false` (and leaves the view
    /// closed) if no such product is loaded.
    pub fn open_details(&mut self, id: ProductId) -> bool {
        self.selected = self.product(id).cloned();
        self.selected.is_some()
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    /// The product shown in the detail view, if open.
    #[must_use]
    pub const fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn is_details_open(&self) -> bool {
        self.selected.is_some()
    }

    /// "Add to Cart" from the detail view: adds the selected product and
    /// closes the view. Returns `None` if the view was not open.
    pub fn add_selected_to_cart(&mut self, cart: &mut CartStore) -> Option<CartChange> {
        let product = self.selected.take()?;
        Some(cart.add_to_cart(&product))
    }
}

/// Count shown on the header cart button: distinct rows, not units.
#[must_use]
pub fn cart_badge(cart: &CartStore) -> usize {
    cart.len()
}
