//! Shopping cart state.
//!
//! [`CartStore`] is the single source of truth for cart contents. The display
//! layer dispatches [`CartAction`]s into it and renders [`CartView`]
//! snapshots taken from it.

mod store;
mod view;

pub use store::{CartAction, CartChange, CartEntry, CartStore};
pub use view::{CartItemView, CartView, EMPTY_CART_MESSAGE};
