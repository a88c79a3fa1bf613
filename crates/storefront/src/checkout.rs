//! Checkout orchestration.
//!
//! Checkout is a local state transition: no payment, no network. It empties
//! the cart, tells the user the order went through and sends them back to
//! the catalog. The cart is always cleared before either collaborator runs,
//! so anything they trigger reads the post-checkout (empty) cart.
//!
//! Collaborators are handed a read-only view of the cart as it stands when
//! they fire, since the screen they show next renders from it.

use core::fmt;

use cartwheel_core::Price;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::cart::CartStore;

/// Notice shown after a successful checkout.
pub const ORDER_PLACED_MESSAGE: &str = "Order Placed Successfully";

/// Named screens the router knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Product catalog.
    Home,
    /// Cart contents and checkout.
    Cart,
}

/// Router collaborator.
pub trait Navigator {
    fn navigate(&mut self, screen: Screen, cart: &CartStore);
}

/// User-facing alert collaborator.
pub trait Notifier {
    fn notify(&mut self, message: &str, cart: &CartStore);
}

/// Errors that can occur during checkout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// There is nothing to check out.
    #[error("cannot check out an empty cart")]
    EmptyCart,
}

/// Locally generated order reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh random order id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary of a completed checkout, captured before the cart was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub order_id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub total_quantity: u64,
    pub total_price: Price,
}

/// Runs checkout against a cart using the given collaborators.
#[derive(Debug)]
pub struct Checkout<N, A> {
    navigator: N,
    notifier: A,
}

impl<N: Navigator, A: Notifier> Checkout<N, A> {
    pub const fn new(navigator: N, notifier: A) -> Self {
        Self {
            navigator,
            notifier,
        }
    }

    /// Place the order: clear the cart, show the confirmation, go home.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] without touching either
    /// collaborator if the cart has no entries.
    #[instrument(skip_all, fields(entries = cart.len()))]
    pub fn complete(&mut self, cart: &mut CartStore) -> Result<Receipt, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let receipt = Receipt {
            order_id: OrderId::generate(),
            placed_at: Utc::now(),
            total_quantity: cart.total_quantity(),
            total_price: cart.total_price(),
        };

        cart.clear_cart();
        self.notifier.notify(ORDER_PLACED_MESSAGE, cart);
        self.navigator.navigate(Screen::Home, cart);

        info!(
            order_id = %receipt.order_id,
            total_quantity = receipt.total_quantity,
            total_price = %receipt.total_price,
            "Order placed"
        );

        Ok(receipt)
    }

    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    pub const fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub const fn notifier(&self) -> &A {
        &self.notifier
    }
}
