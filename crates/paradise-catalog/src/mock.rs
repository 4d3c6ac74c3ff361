//! # Mock Catalog
//!
//! An in-memory listing API with artificial latency.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       MockCatalog::fetch_page                           │
//! │                                                                         │
//! │   PageRequest ──► sleep(latency) ──► paginate(seed, request) ──► Page  │
//! │                                                                         │
//! │   Invalid requests are rejected after the delay, like a real API.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use async_trait::async_trait;
use paradise_core::{paginate, PageRequest, Pet, PetPage};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::CatalogResult;
use crate::seed::seed_pets;
use crate::source::PetSource;

/// Paginated, filterable catalog over a fixed pet list.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    pets: Vec<Pet>,
    latency: Duration,
}

impl MockCatalog {
    /// Creates a catalog over the seed pets.
    pub fn new(latency: Duration) -> Self {
        Self::with_pets(seed_pets(), latency)
    }

    /// Creates a catalog over an explicit pet list.
    pub fn with_pets(pets: Vec<Pet>, latency: Duration) -> Self {
        MockCatalog { pets, latency }
    }

    /// Creates the seed catalog with the configured latency.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

#[async_trait]
impl PetSource for MockCatalog {
    async fn fetch_page(&self, request: &PageRequest) -> CatalogResult<PetPage> {
        debug!(
            page = request.page,
            limit = request.limit,
            category = ?request.category,
            query = ?request.query,
            "Serving mock catalog page"
        );

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(paginate(&self.pets, request)?)
    }
}
