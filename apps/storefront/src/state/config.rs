//! # Configuration State
//!
//! Display settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PARADISE_STORE_NAME`, `PARADISE_CURRENCY_CODE`,
//!    `PARADISE_CURRENCY_SYMBOL`)
//! 2. Defaults (this file)
//!
//! Catalog and API settings live in `paradise_catalog::CatalogConfig`.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use paradise_core::{Money, CART_BADGE_CAP};
use serde::{Deserialize, Serialize};

/// Storefront display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Largest count the cart badge shows before collapsing to "N+"
    pub badge_cap: u32,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Pet Paradise"
    /// - Currency: USD ($), 2 decimals
    /// - Badge cap: 99
    fn default() -> Self {
        ConfigState {
            store_name: "Pet Paradise".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            badge_cap: CART_BADGE_CAP,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PARADISE_STORE_NAME`: Override store name
    /// - `PARADISE_CURRENCY_CODE`: Override currency code
    /// - `PARADISE_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("PARADISE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(code) = lookup("PARADISE_CURRENCY_CODE") {
            config.currency_code = code.trim().to_uppercase();
        }

        if let Some(symbol) = lookup("PARADISE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}
