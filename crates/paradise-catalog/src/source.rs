//! # Pet Source
//!
//! The seam between the listing screen and whatever serves pages.

use async_trait::async_trait;
use paradise_core::{PageRequest, PetPage};

use crate::error::CatalogResult;

/// Anything that can serve a filtered page of pets.
///
/// [`MockCatalog`](crate::MockCatalog) is the shipped implementation;
/// tests substitute their own.
#[async_trait]
pub trait PetSource: Send + Sync {
    /// Resolves one page of the listing.
    ///
    /// ## Errors
    /// - `page = 0` or `limit = 0` is rejected as an invalid request
    async fn fetch_page(&self, request: &PageRequest) -> CatalogResult<PetPage>;
}
