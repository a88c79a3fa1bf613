//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `CARTWHEEL_CATALOG_URL` - Product list endpoint handed to the product
//!   source (default: `https://fakestoreapi.com/products`)
//! - `CARTWHEEL_LOG_FILTER` - Default tracing filter when `RUST_LOG` is unset
//!   (default: `cartwheel_storefront=info`)
//! - `CARTWHEEL_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)

use std::str::FromStr;

use thiserror::Error;
use url::Url;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";
pub const DEFAULT_LOG_FILTER: &str = "cartwheel_storefront=info";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Product list endpoint
    pub catalog_url: Url,
    /// Fallback tracing filter directive
    pub log_filter: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_url = lookup("CARTWHEEL_CATALOG_URL")
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let catalog_url = Url::parse(&catalog_url).map_err(|e| {
            ConfigError::InvalidEnvVar("CARTWHEEL_CATALOG_URL".to_string(), e.to_string())
        })?;
        let log_filter = lookup("CARTWHEEL_LOG_FILTER")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_format = match lookup("CARTWHEEL_LOG_FORMAT") {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::InvalidEnvVar("CARTWHEEL_LOG_FORMAT".to_string(), e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            catalog_url,
            log_filter,
            log_format,
        })
    }
}
