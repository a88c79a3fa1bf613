//! Cartwheel Storefront library.
//!
//! Client-side state for a small mobile storefront: a product catalog screen
//! fed by an external product source, a cart store with id-merging and
//! remove-at-one semantics, and a local checkout that empties the cart.
//!
//! # Architecture
//!
//! - [`cart`] - The cart store, its actions and display snapshots
//! - [`catalog`] - Product source boundary and catalog screen state
//! - [`checkout`] - Checkout orchestration over navigation/alert collaborators
//! - [`session`] - Single owned instance tying the above together
//! - [`config`], [`error`], [`telemetry`] - Ambient setup
//!
//! Everything runs on one logical thread of control; the only asynchronous
//! step is the catalog fetch on screen mount.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;

pub use error::{AppError, Result};
pub use session::Session;

use config::StorefrontConfig;

/// Load configuration from the environment and install logging.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a global tracing
/// subscriber is already installed.
pub fn bootstrap() -> Result<StorefrontConfig> {
    let config = StorefrontConfig::from_env()?;
    telemetry::init(&config)?;
    tracing::info!(catalog_url = %config.catalog_url, "storefront configured");
    Ok(config)
}
