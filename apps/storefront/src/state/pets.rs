//! # Pets State
//!
//! Owns the listing: the loaded pet collection plus the active filter.
//!
//! ## Fetch Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Listing Fetch Lifecycle                              │
//! │                                                                         │
//! │   lock ─► begin_fetch(page) ─► unlock ─► PendingFetch                   │
//! │                                  │                                      │
//! │                          source.fetch_page().await                      │
//! │                                  │                                      │
//! │   lock ─► complete / fail (ticket) ─► unlock                            │
//! │                                                                         │
//! │   A refresh in between bumps the generation; the late ticket is        │
//! │   discarded instead of overwriting the new listing.                     │
//! │   A PendingFetch dropped mid-await releases its loading flag.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use paradise_core::{
    FetchTicket, PageRequest, PetCategory, PetCollection, PetPage, ValidationError,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

/// Category and search text applied to listing requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListingFilter {
    /// `None` shows every category.
    pub category: Option<PetCategory>,

    /// Matched against name and breed; blank means no search.
    pub query: String,
}

impl ListingFilter {
    /// Filter for a tapped category chip, keeping the search text.
    ///
    /// `"all"` clears the category.
    pub fn with_chip(&self, chip: &str) -> Result<ListingFilter, ValidationError> {
        Ok(ListingFilter {
            category: PetCategory::parse_filter(chip)?,
            query: self.query.clone(),
        })
    }

    /// Builds the request for `page` under this filter.
    pub fn request(&self, page: u32, limit: u32) -> PageRequest {
        let request = PageRequest::new(page, limit).with_category(self.category);
        if self.query.trim().is_empty() {
            request
        } else {
            request.with_query(self.query.trim())
        }
    }
}

#[derive(Debug, Default)]
struct Listing {
    collection: PetCollection,
    filter: ListingFilter,
}

/// Shared listing state.
#[derive(Debug, Clone, Default)]
pub struct PetsState {
    inner: Arc<Mutex<Listing>>,
}

impl PetsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the collection.
    pub fn with_pets<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PetCollection) -> R,
    {
        let listing = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&listing.collection)
    }

    /// Executes a function with write access to the collection.
    pub fn with_pets_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PetCollection) -> R,
    {
        let mut listing = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut listing.collection)
    }

    /// The active filter.
    pub fn filter(&self) -> ListingFilter {
        let listing = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        listing.filter.clone()
    }

    /// Replaces the filter and resets the collection in one step.
    pub fn set_filter(&self, filter: ListingFilter) {
        let mut listing = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        listing.filter = filter;
        listing.collection.reset();
    }

    /// Starts a fetch for `page`.
    pub fn begin_fetch(&self, page: u32) -> PendingFetch<'_> {
        let ticket = self.with_pets_mut(|p| p.begin_fetch(page));
        PendingFetch::new(self, ticket)
    }

    /// Starts the "load more" fetch, or `None` while loading or exhausted.
    pub fn begin_next_page(&self) -> Option<PendingFetch<'_>> {
        self.with_pets_mut(PetCollection::begin_next_page)
            .map(|ticket| PendingFetch::new(self, ticket))
    }
}

// =============================================================================
// Pending Fetch
// =============================================================================

/// A listing fetch that has started but not landed.
///
/// Dropping it without calling [`complete`](Self::complete) or
/// [`fail`](Self::fail) abandons the fetch and clears its loading flag.
#[must_use = "dropping a pending fetch abandons it"]
#[derive(Debug)]
pub struct PendingFetch<'a> {
    pets: &'a PetsState,
    ticket: Option<FetchTicket>,
    page: u32,
}

impl<'a> PendingFetch<'a> {
    fn new(pets: &'a PetsState, ticket: FetchTicket) -> Self {
        PendingFetch {
            pets,
            ticket: Some(ticket),
            page: ticket.page,
        }
    }

    /// The page being fetched.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Applies the fetched page. Returns `false` if the fetch went stale.
    pub fn complete(mut self, result: PetPage) -> bool {
        match self.ticket.take() {
            Some(ticket) => self.pets.with_pets_mut(|p| p.complete_fetch(ticket, result)),
            None => false,
        }
    }

    /// Records the failure. Returns `false` if the fetch went stale.
    pub fn fail(mut self, message: impl Into<String>) -> bool {
        match self.ticket.take() {
            Some(ticket) => self.pets.with_pets_mut(|p| p.fail_fetch(ticket, message)),
            None => false,
        }
    }
}

impl Drop for PendingFetch<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            if self.pets.with_pets_mut(|p| p.abandon_fetch(ticket)) {
                debug!(page = %ticket.page, "Abandoned in-flight fetch");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_dropped() {
        let filter = ListingFilter {
            category: Some(PetCategory::Cat),
            query: "   ".into(),
        };
        let request = filter.request(2, 5);

        assert_eq!(request.page, 2);
        assert_eq!(request.limit, 5);
        assert_eq!(request.category, Some(PetCategory::Cat));
        assert_eq!(request.query, None);
    }

    #[test]
    fn test_query_is_trimmed() {
        let filter = ListingFilter {
            category: None,
            query: " lab ".into(),
        };
        assert_eq!(filter.request(1, 10).query.as_deref(), Some("lab"));
    }

    #[test]
    fn test_chip_keeps_query() {
        let filter = ListingFilter {
            category: None,
            query: "lab".into(),
        };

        let dogs = filter.with_chip("Dog").unwrap();
        assert_eq!(dogs.category, Some(PetCategory::Dog));
        assert_eq!(dogs.query, "lab");

        assert_eq!(dogs.with_chip("all").unwrap().category, None);
        assert!(filter.with_chip("fish").is_err());
    }

    #[test]
    fn test_dropped_pending_fetch_clears_flag() {
        let state = PetsState::new();

        let pending = state.begin_fetch(1);
        assert!(state.with_pets(|p| p.is_loading));
        drop(pending);

        state.with_pets(|p| {
            assert!(!p.is_loading);
            assert_eq!(p.error, None);
            assert_eq!(p.next_page(), Some(1));
        });
    }

    #[test]
    fn test_next_page_is_claimed_once() {
        let state = PetsState::new();

        let first = state.begin_next_page();
        assert_eq!(first.as_ref().map(|f| f.page()), Some(1));
        assert!(state.begin_next_page().is_none());

        assert!(first.map(|f| f.fail("offline")).unwrap_or(false));
        assert_eq!(state.with_pets(|p| p.error.clone()).as_deref(), Some("offline"));
        assert!(state.begin_next_page().is_some());
    }

    #[test]
    fn test_set_filter_invalidates_in_flight_fetch() {
        let state = PetsState::new();
        let ticket = state.with_pets_mut(|pets| pets.begin_fetch(1));

        state.set_filter(ListingFilter {
            category: Some(PetCategory::Dog),
            query: String::new(),
        });

        let applied = state.with_pets_mut(|pets| pets.fail_fetch(ticket, "late"));
        assert!(!applied);
        assert_eq!(state.with_pets(|pets| pets.error.clone()), None);
        assert_eq!(state.filter().category, Some(PetCategory::Dog));
    }
}
