//! # paradise-catalog: Data Access Layer for Pet Paradise
//!
//! Everything the storefront awaits lives here: the mock listing API with
//! its artificial latency, and the clients for the two remote services.
//!
//! ## Components
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      paradise-catalog                                   │
//! │                                                                         │
//! │   PetSource (trait) ◄──── MockCatalog ──── seed_pets()                  │
//! │                                │                                        │
//! │                                └── paradise_core::paginate()            │
//! │                                                                         │
//! │   PetApi (trait)    ◄──── HttpPetApi ──── reqwest::Client               │
//! │                                                                         │
//! │   CatalogConfig: defaults → catalog.toml → PARADISE_* env vars          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use paradise_catalog::{CatalogConfig, MockCatalog, PetSource};
//! use paradise_core::PageRequest;
//!
//! # async fn demo() -> paradise_catalog::CatalogResult<()> {
//! let config = CatalogConfig::load_or_default(None);
//! let catalog = MockCatalog::from_config(&config);
//!
//! let page = catalog.fetch_page(&PageRequest::new(1, config.page_size())).await?;
//! println!("{} of {} pets", page.items.len(), page.total_count);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod mock;
pub mod seed;
pub mod source;

pub use api::{HttpPetApi, PetApi, RandomDogImageResponse, SubmitPetResponse};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use mock::MockCatalog;
pub use seed::seed_pets;
pub use source::PetSource;
