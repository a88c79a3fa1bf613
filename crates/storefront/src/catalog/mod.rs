//! Product catalog boundary and home screen state.
//!
//! The catalog itself is an external collaborator: anything that can hand
//! back a list of [`Product`]s implements [`ProductSource`]. This module only
//! owns what the storefront does with that list (loading state, the product
//! detail view, adding the viewed product to the cart).

mod screen;

use std::future::Future;

use cartwheel_core::Product;
use thiserror::Error;

pub use screen::{CatalogScreen, cart_badge};

/// Errors a [`ProductSource`] can report.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source could not deliver a product list (network down, non-2xx
    /// response, ...).
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// The response body was not a list of products.
    #[error("catalog decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Something that can fetch the product list.
///
/// Called once per catalog screen mount. Implementations should not retry;
/// a failure is logged by the screen and shown as an empty catalog.
pub trait ProductSource {
    /// Fetch every product in the catalog.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;
}

/// Decode a catalog response body (a JSON array of products).
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] if the body is not a JSON array of
/// well-formed products.
pub fn decode_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

/// A fixed, in-memory product list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build from a catalog response body.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] if the body cannot be decoded.
    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        decode_products(body).map(Self::new)
    }
}

impl ProductSource for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}
