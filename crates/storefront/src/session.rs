//! The application-root state owner.
//!
//! One [`Session`] lives for the lifetime of the app. It owns the cart, the
//! catalog screen state and the collaborators, and is the only way the
//! display layer touches any of them.

use cartwheel_core::ProductId;
use tracing::instrument;

use crate::cart::{CartAction, CartChange, CartStore, CartView};
use crate::catalog::{CatalogScreen, ProductSource, cart_badge};
use crate::checkout::{Checkout, Navigator, Notifier, Receipt, Screen};
use crate::error::Result;

/// Shopping session state, created empty at app start.
#[derive(Debug)]
pub struct Session<S, N, A> {
    cart: CartStore,
    catalog: CatalogScreen,
    source: S,
    checkout: Checkout<N, A>,
}

impl<S, N, A> Session<S, N, A>
where
    S: ProductSource,
    N: Navigator,
    A: Notifier,
{
    /// Start a session with an empty cart and a catalog that has not loaded.
    pub fn new(source: S, navigator: N, notifier: A) -> Self {
        Self {
            cart: CartStore::new(),
            catalog: CatalogScreen::new(),
            source,
            checkout: Checkout::new(navigator, notifier),
        }
    }

    /// Mount the catalog screen (one fetch, no retry).
    pub async fn mount_catalog(&mut self) -> usize {
        self.catalog.mount(&self.source).await
    }

    /// Apply a cart action.
    pub fn dispatch(&mut self, action: CartAction) -> CartChange {
        self.cart.dispatch(action)
    }

    pub fn open_details(&mut self, id: ProductId) -> bool {
        self.catalog.open_details(id)
    }

    pub fn close_details(&mut self) {
        self.catalog.close_details();
    }

    /// "Add to Cart" from the product detail view.
    pub fn add_selected_to_cart(&mut self) -> Option<CartChange> {
        self.catalog.add_selected_to_cart(&mut self.cart)
    }

    /// Header cart icon: go to the cart screen.
    #[instrument(skip(self), fields(entries = self.cart.len()))]
    pub fn open_cart(&mut self) {
        self.checkout.navigator_mut().navigate(Screen::Cart, &self.cart);
    }

    /// Place the order for everything in the cart.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Checkout` if the cart is empty.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) -> Result<Receipt> {
        Ok(self.checkout.complete(&mut self.cart)?)
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogScreen {
        &self.catalog
    }

    /// Snapshot for the cart screen.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from(&self.cart)
    }

    /// Header badge count.
    #[must_use]
    pub fn cart_badge(&self) -> usize {
        cart_badge(&self.cart)
    }

    pub const fn navigator(&self) -> &N {
        self.checkout.navigator()
    }

    pub const fn notifier(&self) -> &A {
        self.checkout.notifier()
    }
}
