//! The cart store: sole owner of cart entries.
//!
//! Entries are kept in an [`IndexMap`] keyed by product id, so merging a
//! repeated add is a single lookup while iteration still follows the order in
//! which products were first added. Removal uses `shift_remove` to keep that
//! order intact for the remaining rows.
//!
//! Every operation is total: mutations on an id that is not in the cart are
//! no-ops reported as [`CartChange::Unchanged`], never errors.

use cartwheel_core::{Price, Product, ProductId};
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use tracing::debug;

/// One row in the cart.
///
/// Title, price and image are copied from the first [`Product`] added with
/// this id; later adds of the same id only bump the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub image: String,
    /// Always at least 1 while the entry is in a [`CartStore`].
    pub quantity: u32,
}

impl CartEntry {
    /// Price of this row (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

impl From<&Product> for CartEntry {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }
}

/// Outcome of a cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new entry was appended with quantity 1.
    Added { id: ProductId },
    /// An existing entry's quantity went up.
    Incremented { id: ProductId, quantity: u32 },
    /// An existing entry's quantity went down and the entry remains.
    Decremented { id: ProductId, quantity: u32 },
    /// The last unit was taken out, so the entry is gone.
    Removed { id: ProductId },
    /// Every entry was dropped.
    Cleared { removed: usize },
    /// Nothing happened (the id was not in the cart).
    Unchanged,
}

impl CartChange {
    /// Whether the cart contents changed.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::Unchanged | Self::Cleared { removed: 0 })
    }
}

/// A mutation request, as dispatched by the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    AddToCart(Product),
    IncrementQuantity(ProductId),
    DecrementQuantity(ProductId),
    ClearCart,
}

impl CartAction {
    /// Short name used in log events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "add_to_cart",
            Self::IncrementQuantity(_) => "increment_quantity",
            Self::DecrementQuantity(_) => "decrement_quantity",
            Self::ClearCart => "clear_cart",
        }
    }
}

/// In-memory, insertion-ordered shopping cart.
///
/// Derived values ([`total_quantity`](Self::total_quantity),
/// [`total_price`](Self::total_price)) are computed on every call and never
/// stored.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    entries: IndexMap<ProductId, CartEntry>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and report what changed.
    pub fn dispatch(&mut self, action: CartAction) -> CartChange {
        let name = action.name();
        let change = match action {
            CartAction::AddToCart(product) => self.add_to_cart(&product),
            CartAction::IncrementQuantity(id) => self.increment_quantity(id),
            CartAction::DecrementQuantity(id) => self.decrement_quantity(id),
            CartAction::ClearCart => self.clear_cart(),
        };
        debug!(
            action = name,
            change = ?change,
            entries = self.entries.len(),
            "cart action applied"
        );
        change
    }

    /// Add one unit of `product`.
    ///
    /// Merges into the existing entry for the same id (first-seen title,
    /// price and image win), otherwise appends a new entry.
    pub fn add_to_cart(&mut self, product: &Product) -> CartChange {
        match self.entries.entry(product.id) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.quantity = entry.quantity.saturating_add(1);
                CartChange::Incremented {
                    id: product.id,
                    quantity: entry.quantity,
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(CartEntry::from(product));
                CartChange::Added { id: product.id }
            }
        }
    }

    /// Add one unit to an existing entry. Unknown ids are ignored.
    pub fn increment_quantity(&mut self, id: ProductId) -> CartChange {
        let Some(entry) = self.entries.get_mut(&id) else {
            return CartChange::Unchanged;
        };
        entry.quantity = entry.quantity.saturating_add(1);
        CartChange::Incremented {
            id,
            quantity: entry.quantity,
        }
    }

    /// Take one unit off an existing entry.
    ///
    /// At quantity 1 the entry is removed outright rather than kept at zero.
    /// Unknown ids are ignored.
    pub fn decrement_quantity(&mut self, id: ProductId) -> CartChange {
        let Some(entry) = self.entries.get_mut(&id) else {
            return CartChange::Unchanged;
        };
        if entry.quantity > 1 {
            entry.quantity -= 1;
            CartChange::Decremented {
                id,
                quantity: entry.quantity,
            }
        } else {
            self.entries.shift_remove(&id);
            CartChange::Removed { id }
        }
    }

    /// Drop every entry.
    pub fn clear_cart(&mut self) -> CartChange {
        let removed = self.entries.len();
        self.entries.clear();
        CartChange::Cleared { removed }
    }

    /// Entries in the order they were first added.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &CartEntry> + DoubleEndedIterator {
        self.entries.values()
    }

    /// Look up the entry for `id`.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of distinct entries (rows), not units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.entries.values().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of `price * quantity` over all entries, unrounded.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.entries.values().map(CartEntry::line_total).sum()
    }
}

// Order-sensitive, unlike `IndexMap`'s own equality.
impl PartialEq for CartStore {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.items().eq(other.items())
    }
}

impl Eq for CartStore {}
