//! # Catalog Error Types
//!
//! Error types for the data access layer.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │     Remote      │  │       Request           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Http           │  │  InvalidRequest         │ │
//! │  │  InvalidUrl     │  │  Api            │  │  (wraps CoreError)      │ │
//! │  │  ConfigLoad...  │  │  Unexpected...  │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use paradise_core::CoreError;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures of the catalog, the remote APIs and configuration loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid catalog configuration.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Base URL that is not http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Remote Errors
    // =========================================================================
    /// Transport failure (DNS, connect, timeout, body decode).
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered, but not with success.
    ///
    /// `message` is what the shopper sees.
    #[error("{message}")]
    Api { status: Option<u16>, message: String },

    /// The remote API answered 2xx with a body we cannot use.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    // =========================================================================
    // Request Errors
    // =========================================================================
    /// The page request itself was rejected by the domain rules.
    #[error(transparent)]
    InvalidRequest(#[from] CoreError),
}

impl CatalogError {
    /// Returns true for failures of a remote call.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            CatalogError::Http(_) | CatalogError::Api { .. } | CatalogError::UnexpectedResponse(_)
        )
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}
