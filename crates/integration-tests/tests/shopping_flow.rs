//! End-to-end shopping session tests.
//!
//! These drive a [`Session`] the way the two screens do: mount the catalog,
//! open a product, add it, adjust quantities on the cart screen, then check
//! out.

#![allow(clippy::unwrap_used)]

use cartwheel_core::{Price, Product, ProductId};
use cartwheel_integration_tests::{CATALOG_BODY, Event, Recorder, product};
use cartwheel_storefront::cart::{CartAction, CartChange, EMPTY_CART_MESSAGE};
use cartwheel_storefront::catalog::{CatalogError, ProductSource, StaticCatalog};
use cartwheel_storefront::checkout::{CheckoutError, ORDER_PLACED_MESSAGE, Screen};
use cartwheel_storefront::{AppError, Session};

type TestSession = Session<StaticCatalog, Recorder, Recorder>;

fn session() -> (TestSession, Recorder) {
    let catalog = StaticCatalog::from_json(CATALOG_BODY).unwrap();
    let recorder = Recorder::default();
    (
        Session::new(catalog, recorder.clone(), recorder.clone()),
        recorder,
    )
}

struct OfflineCatalog;

impl ProductSource for OfflineCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Err(CatalogError::Unavailable("network unreachable".to_string()))
    }
}

// =============================================================================
// Catalog Tests
// =============================================================================

#[tokio::test]
async fn test_catalog_mount_loads_api_shaped_products() {
    let (mut session, _) = session();
    assert!(session.catalog().is_loading());

    let shown = session.mount_catalog().await;

    assert_eq!(shown, 3);
    assert!(!session.catalog().is_loading());
    let bracelet = session.catalog().product(ProductId::new(5)).unwrap();
    assert_eq!(bracelet.price, Price::from_cents(69_500));
    assert_eq!(bracelet.category, "jewelery");
}

#[tokio::test]
async fn test_catalog_fetch_failure_shows_nothing() {
    let recorder = Recorder::default();
    let mut session = Session::new(OfflineCatalog, recorder.clone(), recorder);

    assert_eq!(session.mount_catalog().await, 0);
    assert!(!session.catalog().is_loading());
    assert!(session.catalog().products().is_empty());
    assert!(!session.open_details(ProductId::new(1)));
}

#[tokio::test]
async fn test_detail_view_add_to_cart() {
    let (mut session, _) = session();
    session.mount_catalog().await;

    assert!(session.open_details(ProductId::new(2)));
    assert_eq!(
        session.add_selected_to_cart(),
        Some(CartChange::Added {
            id: ProductId::new(2)
        })
    );
    assert!(!session.catalog().is_details_open());

    // Adding again through the detail view merges into the same row.
    session.open_details(ProductId::new(2));
    session.add_selected_to_cart();
    assert_eq!(session.cart_badge(), 1);
    assert_eq!(session.cart().total_quantity(), 2);
}

#[tokio::test]
async fn test_close_details_without_adding() {
    let (mut session, _) = session();
    session.mount_catalog().await;

    session.open_details(ProductId::new(1));
    session.close_details();
    assert_eq!(session.add_selected_to_cart(), None);
    assert!(session.cart().is_empty());
}

// =============================================================================
// Cart Tests
// =============================================================================

#[test]
fn test_add_a_b_a_keeps_first_add_order() {
    let (mut session, _) = session();
    let a = product(1, 1000);
    let b = product(2, 500);

    session.dispatch(CartAction::AddToCart(a.clone()));
    session.dispatch(CartAction::AddToCart(b.clone()));
    session.dispatch(CartAction::AddToCart(a.clone()));

    let rows: Vec<(ProductId, u32)> = session
        .cart()
        .items()
        .map(|e| (e.id, e.quantity))
        .collect();
    assert_eq!(rows, vec![(a.id, 2), (b.id, 1)]);
}

#[test]
fn test_minus_on_last_unit_deletes_row() {
    let (mut session, _) = session();
    let a = product(1, 1000);
    session.dispatch(CartAction::AddToCart(a.clone()));

    assert_eq!(
        session.dispatch(CartAction::DecrementQuantity(a.id)),
        CartChange::Removed { id: a.id }
    );
    let view = session.cart_view();
    assert!(view.is_empty());
    assert_eq!(view.empty_message(), Some(EMPTY_CART_MESSAGE));
    assert_eq!(view.total_label(), "Total: $0.00");
}

#[test]
fn test_plus_and_minus_on_cart_screen() {
    let (mut session, _) = session();
    let a = product(1, 1000);
    session.dispatch(CartAction::AddToCart(a.clone()));
    session.dispatch(CartAction::IncrementQuantity(a.id));
    session.dispatch(CartAction::IncrementQuantity(a.id));

    assert_eq!(
        session.dispatch(CartAction::DecrementQuantity(a.id)),
        CartChange::Decremented {
            id: a.id,
            quantity: 2
        }
    );
    assert!(session.cart().contains(a.id));
}

#[test]
fn test_totals_for_mixed_cart() {
    let (mut session, _) = session();
    let ten = product(1, 1000);
    let five_fifty = product(2, 550);
    session.dispatch(CartAction::AddToCart(ten.clone()));
    session.dispatch(CartAction::AddToCart(ten));
    session.dispatch(CartAction::AddToCart(five_fifty));

    let view = session.cart_view();
    assert_eq!(view.item_count, 3);
    assert_eq!(view.subtotal, "$25.50");
    assert_eq!(session.cart().total_price(), Price::from_cents(2550));
}

// =============================================================================
// Checkout Tests
// =============================================================================

#[tokio::test]
async fn test_checkout_empties_cart_then_alerts_and_goes_home() {
    let (mut session, recorder) = session();
    session.mount_catalog().await;
    for id in [1, 2, 5, 1] {
        session.open_details(ProductId::new(id));
        session.add_selected_to_cart();
    }
    session.open_cart();

    let receipt = session.checkout().unwrap();

    assert_eq!(session.cart().items().count(), 0);
    assert_eq!(session.cart_badge(), 0);
    assert_eq!(receipt.total_quantity, 4);
    // 2 x 109.95 + 22.30 + 695.00
    assert_eq!(receipt.total_price, Price::from_cents(93_720));
    // The alert and the home screen both see the already-cleared cart.
    assert_eq!(
        recorder.events(),
        vec![
            Event::Navigated {
                screen: Screen::Cart,
                cart_len: 3
            },
            Event::Notified {
                message: ORDER_PLACED_MESSAGE.to_string(),
                cart_len: 0
            },
            Event::Navigated {
                screen: Screen::Home,
                cart_len: 0
            },
        ]
    );
}

#[test]
fn test_checkout_with_empty_cart_is_refused() {
    let (mut session, recorder) = session();

    let err = session.checkout().unwrap_err();

    assert!(matches!(err, AppError::Checkout(CheckoutError::EmptyCart)));
    assert!(recorder.events().is_empty());
}

#[test]
fn test_cart_is_usable_after_checkout() {
    let (mut session, _) = session();
    session.dispatch(CartAction::AddToCart(product(1, 100)));
    session.checkout().unwrap();

    session.dispatch(CartAction::AddToCart(product(2, 200)));
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart().total_price(), Price::from_cents(200));
}
