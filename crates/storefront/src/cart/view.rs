//! Display-ready cart snapshots.

use cartwheel_core::{Price, ProductId};
use serde::Serialize;

use super::store::{CartEntry, CartStore};

/// Message shown in place of the item list when the cart has no entries.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub quantity: u32,
    /// Unit price, e.g. `"$10.00"`.
    pub price: String,
    /// Unit price times quantity, e.g. `"$20.00"`.
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Total price rounded to cents, e.g. `"$25.50"`.
    pub subtotal: String,
    /// Total number of units across all rows.
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: Price::ZERO.to_string(),
            item_count: 0,
        }
    }

    /// Whether there is anything to show. The checkout footer is only
    /// rendered when this is `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Text shown in place of the item list, if any.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_CART_MESSAGE)
    }

    /// Footer label, e.g. `"Total: $25.50"`.
    #[must_use]
    pub fn total_label(&self) -> String {
        format!("Total: {}", self.subtotal)
    }
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            image: entry.image.clone(),
            quantity: entry.quantity,
            price: entry.price.to_string(),
            line_price: entry.line_total().to_string(),
        }
    }
}

impl From<&CartStore> for CartView {
    fn from(store: &CartStore) -> Self {
        Self {
            items: store.items().map(CartItemView::from).collect(),
            subtotal: store.total_price().to_string(),
            item_count: store.total_quantity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use cartwheel_core::Product;

    use super::*;

    fn product(id: u32, cents: u32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(cents),
            description: String::new(),
            category: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::empty();
        assert!(view.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view, CartView::from(&CartStore::new()));
    }

    #[test]
    fn test_empty_message_only_for_empty_cart() {
        let mut store = CartStore::new();
        assert_eq!(
            CartView::from(&store).empty_message(),
            Some("Your cart is empty.")
        );

        store.add_to_cart(&product(1, 1000));
        assert_eq!(CartView::from(&store).empty_message(), None);

        store.decrement_quantity(ProductId::new(1));
        assert_eq!(
            CartView::from(&store).empty_message(),
            Some(EMPTY_CART_MESSAGE)
        );
    }

    #[test]
    fn test_view_formats_prices() {
        let mut store = CartStore::new();
        store.add_to_cart(&product(1, 1000));
        store.add_to_cart(&product(1, 1000));
        store.add_to_cart(&product(2, 550));

        let view = CartView::from(&store);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "$25.50");
        assert_eq!(view.total_label(), "Total: $25.50");

        let first = view.items.first();
        assert_eq!(first.map(|i| i.price.as_str()), Some("$10.00"));
        assert_eq!(first.map(|i| i.line_price.as_str()), Some("$20.00"));
        assert_eq!(first.map(|i| i.quantity), Some(2));
    }
}
