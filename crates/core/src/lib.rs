//! Cartwheel Core - Shared types library.
//!
//! This crate provides the catalog types used across Cartwheel components:
//! - `storefront` - Cart store, catalog screen state and checkout orchestration
//! - `integration-tests` - Cross-crate scenario and property tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no logging.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs and prices, plus the
//!   [`Product`] record as delivered by the catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
