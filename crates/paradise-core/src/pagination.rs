//! # Pagination
//!
//! Filters a pet catalog and cuts one page out of it.
//!
//! ## Pipeline
//! ```text
//! catalog ──► category filter ──► search filter ──► slice ──► PetPage
//!             (skip if None)      (name OR breed,   [(page-1)*limit,
//!                                  case-insensitive)  +limit)
//! ```
//!
//! `total_count` and `total_pages` describe the *filtered* catalog, so
//! the listing knows when to stop asking for more.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::types::{Pet, PetCategory};
use crate::validation::validate_page_request;

// =============================================================================
// Page Request
// =============================================================================

/// Parameters of one listing fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,

    /// Page size.
    pub limit: u32,

    /// `None` lists every category.
    #[serde(default)]
    pub category: Option<PetCategory>,

    /// Free-text search over name and breed.
    #[serde(default)]
    pub query: Option<String>,
}

impl PageRequest {
    /// Unfiltered request for one page.
    pub fn new(page: u32, limit: u32) -> Self {
        PageRequest {
            page,
            limit,
            category: None,
            query: None,
        }
    }

    pub fn with_category(mut self, category: Option<PetCategory>) -> Self {
        self.category = category;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Same filters, different page.
    pub fn for_page(&self, page: u32) -> Self {
        PageRequest {
            page,
            ..self.clone()
        }
    }

    /// Lowercased search needle, or `None` when the query is blank.
    fn needle(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

// =============================================================================
// Pet Page
// =============================================================================

/// One page of listing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PetPage {
    pub items: Vec<Pet>,
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u32,
    pub has_more: bool,
}

// =============================================================================
// Paginate
// =============================================================================

/// Filters `catalog` by the request and returns the requested page.
///
/// ## Edge Cases
/// - A page past the end yields no items and `has_more = false`
/// - `page = 0` or `limit = 0` is rejected
///
/// ## Example
/// ```rust
/// use paradise_core::money::Money;
/// use paradise_core::pagination::{paginate, PageRequest};
/// use paradise_core::types::{Pet, PetCategory};
///
/// let catalog: Vec<Pet> = (1..=8)
///     .map(|i| Pet::new(i.to_string(), format!("Pet {i}"), "Mixed", 1.0, Money::from_major(100), PetCategory::Other))
///     .collect();
///
/// let page = paginate(&catalog, &PageRequest::new(2, 5)).unwrap();
/// assert_eq!(page.items.len(), 3);
/// assert!(!page.has_more);
/// ```
pub fn paginate(catalog: &[Pet], request: &PageRequest) -> CoreResult<PetPage> {
    validate_page_request(request.page, request.limit)?;

    let needle = request.needle();
    let filtered: Vec<&Pet> = catalog
        .iter()
        .filter(|pet| request.category.map_or(true, |c| pet.category == c))
        .filter(|pet| needle.as_deref().map_or(true, |n| pet.matches_query(n)))
        .collect();

    let total_count = filtered.len() as u32;
    let total_pages = total_count.div_ceil(request.limit);

    let start = (request.page as usize - 1).saturating_mul(request.limit as usize);
    let items = filtered
        .into_iter()
        .skip(start)
        .take(request.limit as usize)
        .cloned()
        .collect();

    Ok(PetPage {
        items,
        page: request.page,
        total_pages,
        total_count,
        has_more: request.page < total_pages,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
