//! # Catalog Configuration
//!
//! Settings for the mock catalog and the remote API clients.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PARADISE_LATENCY_MS=0                                              │
//! │     PARADISE_API_URL=http://localhost:3000/api                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/pet-paradise/catalog.toml (Linux)                        │
//! │     ~/Library/Application Support/com.paradise.pet-paradise/... (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     1000 ms latency, 10 pets per page, public placeholder APIs         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # catalog.toml
//! [catalog]
//! latency_ms = 250
//! page_size = 10
//!
//! [api]
//! base_url = "https://reqres.in/api"
//! dog_api_url = "https://dog.ceo/api"
//! remote_submit = false
//! timeout_secs = 15
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Catalog Settings
// =============================================================================

/// Mock catalog behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Artificial delay before every page resolves (milliseconds).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Pets per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_latency_ms() -> u64 {
    1_000
}

fn default_page_size() -> u32 {
    paradise_core::DEFAULT_PAGE_SIZE
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            latency_ms: default_latency_ms(),
            page_size: default_page_size(),
        }
    }
}

// =============================================================================
// API Settings
// =============================================================================

/// Remote API endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Placeholder REST API that accepts pet submissions.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Random dog image API.
    #[serde(default = "default_dog_api_url")]
    pub dog_api_url: String,

    /// Submit new pets through the REST API instead of creating them locally.
    #[serde(default)]
    pub remote_submit: bool,

    /// Per-request timeout. Unset means requests may wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://reqres.in/api".to_string()
}

fn default_dog_api_url() -> String {
    "https://dog.ceo/api".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            dog_api_url: default_dog_api_url(),
            remote_submit: false,
            timeout_secs: None,
        }
    }
}

// =============================================================================
// Main Catalog Configuration
// =============================================================================

/// Complete data-layer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub api: ApiSettings,
}

impl CatalogConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (catalog.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading catalog config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load catalog config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml(contents: &str) -> CatalogResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.catalog.page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "page_size must be greater than 0".into(),
            ));
        }

        for url in [&self.api.base_url, &self.api.dog_api_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CatalogError::InvalidUrl(format!(
                    "API URL must start with http:// or https://, got: {}",
                    url
                )));
            }
        }

        if self.api.timeout_secs == Some(0) {
            return Err(CatalogError::InvalidConfig(
                "timeout_secs must be greater than 0 when set".into(),
            ));
        }

        Ok(())
    }

    /// Applies `PARADISE_*` overrides read through `lookup`.
    ///
    /// Unparseable numeric values are logged and ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("PARADISE_LATENCY_MS") {
            match value.parse() {
                Ok(ms) => {
                    debug!(latency_ms = ms, "Overriding catalog latency from environment");
                    self.catalog.latency_ms = ms;
                }
                Err(_) => warn!(value = %value, "Ignoring invalid PARADISE_LATENCY_MS"),
            }
        }

        if let Some(value) = lookup("PARADISE_PAGE_SIZE") {
            match value.parse() {
                Ok(size) => self.catalog.page_size = size,
                Err(_) => warn!(value = %value, "Ignoring invalid PARADISE_PAGE_SIZE"),
            }
        }

        if let Some(url) = lookup("PARADISE_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(url) = lookup("PARADISE_DOG_API_URL") {
            self.api.dog_api_url = url;
        }

        if let Some(value) = lookup("PARADISE_REMOTE_SUBMIT") {
            match value.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.api.remote_submit = true,
                "0" | "false" | "no" | "off" => self.api.remote_submit = false,
                _ => warn!(value = %value, "Ignoring invalid PARADISE_REMOTE_SUBMIT"),
            }
        }

        if let Some(value) = lookup("PARADISE_TIMEOUT_SECS") {
            match value.parse() {
                Ok(secs) => self.api.timeout_secs = Some(secs),
                Err(_) => warn!(value = %value, "Ignoring invalid PARADISE_TIMEOUT_SECS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "paradise", "pet-paradise")
            .map(|dirs| dirs.config_dir().join("catalog.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Artificial catalog latency.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.catalog.latency_ms)
    }

    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }

    pub fn page_size(&self) -> u32 {
        self.catalog.page_size
    }
}
