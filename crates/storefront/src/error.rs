//! Unified error handling.
//!
//! Provides a unified `AppError` type that wraps the per-concern errors so
//! hosts embedding the storefront can propagate everything with `?`. Cart
//! store operations themselves never fail and do not appear here.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The product catalog could not be read.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout was refused.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// The global tracing subscriber could not be installed.
    #[error("Telemetry error: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(CheckoutError::EmptyCart);
        assert_eq!(
            err.to_string(),
            "Checkout error: cannot check out an empty cart"
        );

        let err = AppError::from(CatalogError::Unavailable("timeout".to_string()));
        assert_eq!(
            err.to_string(),
            "Catalog error: catalog unavailable: timeout"
        );

        let err = AppError::from(ConfigError::InvalidEnvVar(
            "CARTWHEEL_LOG_FORMAT".to_string(),
            "bad".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable CARTWHEEL_LOG_FORMAT: bad"
        );
    }
}
