//! Integration tests for Cartwheel.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cartwheel-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Property tests over arbitrary cart action sequences
//! - `shopping_flow` - Catalog mount, detail view, cart and checkout end to end
//!
//! This library holds the shared fixtures.

use std::cell::RefCell;
use std::rc::Rc;

use cartwheel_core::{Price, Product, ProductId};
use cartwheel_storefront::cart::CartStore;
use cartwheel_storefront::checkout::{Navigator, Notifier, Screen};

/// Build a product with a predictable title and image.
#[must_use]
pub fn product(id: u32, cents: u32) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        price: Price::from_cents(cents),
        description: format!("Description of product {id}"),
        category: "electronics".to_string(),
        image: format!("https://img.example/{id}.jpg"),
    }
}

/// A catalog response body shaped like the public product API.
pub const CATALOG_BODY: &str = r#"[
    {"id": 1, "title": "Fjallraven - Foldsack No. 1 Backpack", "price": 109.95,
     "description": "Your perfect pack for everyday use and walks in the forest.",
     "category": "men's clothing",
     "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
     "rating": {"rate": 3.9, "count": 120}},
    {"id": 2, "title": "Mens Casual Premium Slim Fit T-Shirts", "price": 22.3,
     "description": "Slim-fitting style, contrast raglan long sleeve.",
     "category": "men's clothing",
     "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
     "rating": {"rate": 4.1, "count": 259}},
    {"id": 5, "title": "John Hardy Women's Legends Naga Bracelet", "price": 695,
     "description": "From our Legends Collection.",
     "category": "jewelery",
     "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
     "rating": {"rate": 4.6, "count": 400}}
]"#;

/// Something a collaborator was asked to do, with the number of cart rows
/// it could see at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Notified { message: String, cart_len: usize },
    Navigated { screen: Screen, cart_len: usize },
}

/// Collaborator double that records every navigation and notice.
///
/// Clones share one log, so passing the same recorder as both navigator and
/// notifier captures their relative order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }
}

impl Navigator for Recorder {
    fn navigate(&mut self, screen: Screen, cart: &CartStore) {
        self.log.borrow_mut().push(Event::Navigated {
            screen,
            cart_len: cart.len(),
        });
    }
}

impl Notifier for Recorder {
    fn notify(&mut self, message: &str, cart: &CartStore) {
        self.log.borrow_mut().push(Event::Notified {
            message: message.to_string(),
            cart_len: cart.len(),
        });
    }
}
