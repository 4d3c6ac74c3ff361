//! # Pet Collection
//!
//! The paginated listing as the shopper has loaded it so far.
//!
//! ## Fetch Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fetch Lifecycle                                  │
//! │                                                                         │
//! │   begin_fetch(page) ──► FetchTicket { page, generation }                │
//! │        │                   (isLoading for page 1,                       │
//! │        │                    isLoadingMore otherwise)                    │
//! │        ▼                                                                │
//! │   ... await the catalog ...                                             │
//! │        │                                                                │
//! │        ├── Ok(page)  ──► complete_fetch(ticket, page)                   │
//! │        │                   page 1 replaces items, later pages append    │
//! │        │                                                                │
//! │        ├── Err(msg)  ──► fail_fetch(ticket, msg)                        │
//! │        │                   items untouched, error set                   │
//! │        │                                                                │
//! │        └── dropped   ──► abandon_fetch(ticket)                          │
//! │                            items and error untouched                    │
//! │                                                                         │
//! │   reset() bumps the generation: any ticket issued before it is stale   │
//! │   and its result is dropped on arrival.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two page-1 fetches started in the same generation may resolve in either
//! order; the one that resolves last wins. The loading flags stay set until
//! every fetch of their kind has finished.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pagination::PetPage;
use crate::types::Pet;

// =============================================================================
// Fetch Ticket
// =============================================================================

/// Handle for one in-flight page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    /// The page being requested.
    pub page: u32,
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// =============================================================================
// Pet Collection
// =============================================================================

/// Loaded pets plus loading, error and pagination flags.
///
/// ## Invariants
/// - `current_page` advances only when a fetch for that page succeeds
/// - `items.len() <= total_count`
/// - `reset()` empties `items`, sets `current_page` to 0 and `has_more` to true
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PetCollection {
    pub items: Vec<Pet>,

    /// Last successfully loaded page; 0 before the first load.
    pub current_page: u32,

    pub has_more: bool,

    /// A first-page load (initial or refresh) is in flight.
    pub is_loading: bool,

    /// A follow-up page load is in flight.
    pub is_loading_more: bool,

    /// Message of the last failed fetch.
    pub error: Option<String>,

    /// Size of the filtered catalog, plus locally added pets.
    pub total_count: u32,

    #[serde(skip)]
    #[ts(skip)]
    generation: u64,

    /// In-flight page-1 fetches of this generation.
    #[serde(skip)]
    #[ts(skip)]
    first_page_fetches: u32,

    /// In-flight follow-up fetches of this generation.
    #[serde(skip)]
    #[ts(skip)]
    more_fetches: u32,

    /// Pets added locally since the last page-1 load; they sit at the top.
    #[serde(skip)]
    #[ts(skip)]
    local_additions: u32,
}

impl Default for PetCollection {
    fn default() -> Self {
        PetCollection {
            items: Vec::new(),
            current_page: 0,
            has_more: true,
            is_loading: false,
            is_loading_more: false,
            error: None,
            total_count: 0,
            generation: 0,
            first_page_fetches: 0,
            more_fetches: 0,
            local_additions: 0,
        }
    }
}

impl PetCollection {
    /// Creates an empty collection ready for its first load.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Fetching
    // -------------------------------------------------------------------------

    /// Marks a fetch for `page` as in flight.
    pub fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        if page <= 1 {
            self.first_page_fetches = self.first_page_fetches.saturating_add(1);
            self.is_loading = true;
        } else {
            self.more_fetches = self.more_fetches.saturating_add(1);
            self.is_loading_more = true;
        }
        self.error = None;

        FetchTicket {
            page,
            generation: self.generation,
        }
    }

    /// Applies a fetched page.
    ///
    /// Returns `false` (and changes nothing) when the ticket predates the
    /// latest [`reset`](Self::reset).
    pub fn complete_fetch(&mut self, ticket: FetchTicket, page: PetPage) -> bool {
        if self.is_stale(ticket) {
            return false;
        }

        if page.page <= 1 {
            self.items = page.items;
            self.local_additions = 0;
        } else {
            self.items.extend(page.items);
        }

        let loaded = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        self.current_page = page.page;
        self.has_more = page.has_more;
        self.total_count = page
            .total_count
            .saturating_add(self.local_additions)
            .max(loaded);
        self.error = None;
        self.finish(ticket.page);
        true
    }

    /// Records a failed fetch, leaving `items` untouched.
    ///
    /// Returns `false` when the ticket is stale.
    pub fn fail_fetch(&mut self, ticket: FetchTicket, message: impl Into<String>) -> bool {
        if self.is_stale(ticket) {
            return false;
        }

        self.error = Some(message.into());
        self.finish(ticket.page);
        true
    }

    /// Releases a fetch that will never resolve (its caller went away).
    ///
    /// Only the loading flag is touched. Returns `false` when the ticket is
    /// stale.
    pub fn abandon_fetch(&mut self, ticket: FetchTicket) -> bool {
        if self.is_stale(ticket) {
            return false;
        }

        self.finish(ticket.page);
        true
    }

    /// The page "load more" should request next.
    ///
    /// `None` while any load is in flight or once the catalog is exhausted.
    pub fn next_page(&self) -> Option<u32> {
        if self.is_busy() || !self.has_more {
            return None;
        }
        Some(self.current_page.saturating_add(1))
    }

    /// Starts the "load more" fetch if [`next_page`](Self::next_page) allows
    /// one.
    ///
    /// Checking and starting happen in one call, so two callers holding the
    /// same lock in turn cannot both start the same page.
    pub fn begin_next_page(&mut self) -> Option<FetchTicket> {
        let page = self.next_page()?;
        Some(self.begin_fetch(page))
    }

    /// Returns true if any fetch is in flight.
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_loading_more
    }

    fn is_stale(&self, ticket: FetchTicket) -> bool {
        ticket.generation != self.generation
    }

    fn finish(&mut self, page: u32) {
        if page <= 1 {
            self.first_page_fetches = self.first_page_fetches.saturating_sub(1);
            self.is_loading = self.first_page_fetches > 0;
        } else {
            self.more_fetches = self.more_fetches.saturating_sub(1);
            self.is_loading_more = self.more_fetches > 0;
        }
    }

    // -------------------------------------------------------------------------
    // Local Mutations
    // -------------------------------------------------------------------------

    /// Inserts a newly created pet at the top of the listing.
    pub fn add_pet(&mut self, pet: Pet) {
        self.items.insert(0, pet);
        self.local_additions = self.local_additions.saturating_add(1);
        self.total_count = self.total_count.saturating_add(1);
    }

    /// Removes a pet by id; no-op if absent.
    pub fn remove_pet(&mut self, pet_id: &str) -> Option<Pet> {
        let index = self.items.iter().position(|p| p.id == pet_id)?;
        if (index as u64) < u64::from(self.local_additions) {
            self.local_additions -= 1;
        }
        self.total_count = self.total_count.saturating_sub(1);
        Some(self.items.remove(index))
    }

    /// Flips `is_favorite` on a pet.
    ///
    /// Returns the new value, or `None` when the id is unknown.
    pub fn toggle_favorite(&mut self, pet_id: &str) -> Option<bool> {
        let pet = self.items.iter_mut().find(|p| p.id == pet_id)?;
        pet.is_favorite = !pet.is_favorite;
        Some(pet.is_favorite)
    }

    /// Clears the listing and invalidates every in-flight fetch.
    pub fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = PetCollection {
            generation,
            ..PetCollection::default()
        };
    }

    /// Reads one pet by id.
    pub fn find(&self, pet_id: &str) -> Option<&Pet> {
        self.items.iter().find(|p| p.id == pet_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::PetCategory;

    fn pet(id: &str) -> Pet {
        Pet::new(id, format!("Pet {id}"), "Mixed", 1.0, Money::from_major(50), PetCategory::Cat)
    }

    fn page(number: u32, ids: &[&str], total_count: u32, has_more: bool) -> PetPage {
        PetPage {
            items: ids.iter().map(|id| pet(id)).collect(),
            page: number,
            total_pages: 2,
            total_count,
            has_more,
        }
    }

    fn ids(collection: &PetCollection) -> Vec<&str> {
        collection.items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_first_page_then_more() {
        let mut pets = PetCollection::new();
        assert_eq!(pets.next_page(), Some(1));

        let ticket = pets.begin_fetch(1);
        assert!(pets.is_loading);
        assert_eq!(pets.next_page(), None);

        assert!(pets.complete_fetch(ticket, page(1, &["1", "2"], 3, true)));
        assert!(!pets.is_loading);
        assert_eq!(pets.current_page, 1);
        assert_eq!(pets.next_page(), Some(2));

        let ticket = pets.begin_fetch(2);
        assert!(pets.is_loading_more);
        pets.complete_fetch(ticket, page(2, &["3"], 3, false));

        assert_eq!(ids(&pets), vec!["1", "2", "3"]);
        assert!(!pets.has_more);
        assert_eq!(pets.next_page(), None);
        assert!(pets.items.len() as u32 <= pets.total_count);
    }

    #[test]
    fn test_page_one_replaces_items() {
        let mut pets = PetCollection::new();
        let t = pets.begin_fetch(1);
        pets.complete_fetch(t, page(1, &["1", "2"], 2, false));

        let t = pets.begin_fetch(1);
        pets.complete_fetch(t, page(1, &["9"], 1, false));
        assert_eq!(ids(&pets), vec!["9"]);
    }

    #[test]
    fn test_racing_first_pages_last_resolve_wins() {
        let mut pets = PetCollection::new();
        let slow = pets.begin_fetch(1);
        let fast = pets.begin_fetch(1);

        pets.complete_fetch(fast, page(1, &["fast"], 1, false));
        pets.complete_fetch(slow, page(1, &["slow"], 1, false));

        assert_eq!(ids(&pets), vec!["slow"]);
    }

    #[test]
    fn test_racing_first_pages_keep_loading_until_both_land() {
        let mut pets = PetCollection::new();
        let slow = pets.begin_fetch(1);
        let fast = pets.begin_fetch(1);

        pets.complete_fetch(fast, page(1, &["fast"], 1, false));
        assert!(pets.is_loading);
        assert_eq!(pets.next_page(), None);

        pets.fail_fetch(slow, "timeout");
        assert!(!pets.is_loading);
        assert_eq!(ids(&pets), vec!["fast"]);
    }

    #[test]
    fn test_begin_next_page_starts_once() {
        let mut pets = PetCollection::new();
        let t = pets.begin_fetch(1);
        pets.complete_fetch(t, page(1, &["1"], 2, true));

        let ticket = pets.begin_next_page().map(|t| t.page);
        assert_eq!(ticket, Some(2));
        assert!(pets.is_loading_more);
        assert!(pets.begin_next_page().is_none());
    }

    #[test]
    fn test_abandoned_fetch_releases_flag() {
        let mut pets = PetCollection::new();
        let t = pets.begin_fetch(1);
        pets.complete_fetch(t, page(1, &["1"], 2, true));

        let ticket = pets.begin_fetch(2);
        assert!(pets.is_busy());
        assert!(pets.abandon_fetch(ticket));

        assert!(!pets.is_busy());
        assert_eq!(pets.error, None);
        assert_eq!(ids(&pets), vec!["1"]);
        assert_eq!(pets.next_page(), Some(2));

        let stale = pets.begin_fetch(2);
        pets.reset();
        assert!(!pets.abandon_fetch(stale));
    }

    #[test]
    fn test_local_pet_survives_next_page_total() {
        let mut pets = PetCollection::new();
        let t = pets.begin_fetch(1);
        pets.complete_fetch(t, page(1, &["1", "2"], 3, true));

        pets.add_pet(pet("new"));
        assert_eq!(pets.total_count, 4);

        let t = pets.begin_fetch(2);
        pets.complete_fetch(t, page(2, &["3"], 3, false));

        assert_eq!(ids(&pets), vec!["new", "1", "2", "3"]);
        assert_eq!(pets.total_count, 4);
        assert!(pets.items.len() as u32 <= pets.total_count);

        // A page-1 reload drops local pets and their share of the total
        let t = pets.begin_fetch(1);
        pets.complete_fetch(t, page(1, &["1", "2"], 3, true));
        assert_eq!(pets.total_count, 3);
    }

    #[test]
    fn test_removing_local_pet_shrinks_offset() {
        let mut pets = PetCollection::new();
        let t = pets.begin_fetch(1);
        pets.complete_fetch(t, page(1, &["1"], 2, true));

        pets.add_pet(pet("new"));
        pets.remove_pet("new");

        let t = pets.begin_fetch(2);
        pets.complete_fetch(t, page(2, &["2"], 2, false));
        assert_eq!(pets.total_count, 2);
        assert_eq!(pets.items.len(), 2);
    }

    #[test]
    fn test_failure_keeps_items_and_clears_flags() {
        let mut pets = PetCollection::new();
        let t = pets.begin_fetch(1);
        pets.complete_fetch(t, page(1, &["1"], 2, true));

        let t = pets.begin_fetch(2);
        assert!(pets.fail_fetch(t, "Network down"));

        assert_eq!(ids(&pets), vec!["1"]);
        assert_eq!(pets.error.as_deref(), Some("Network down"));
        assert!(!pets.is_loading_more);
        assert_eq!(pets.current_page, 1);
        assert_eq!(pets.next_page(), Some(2));
    }

    #[test]
    fn test_stale_page_discarded_after_reset() {
        let mut pets = PetCollection::new();
        let t = pets.begin_fetch(1);
        pets.complete_fetch(t, page(1, &["1"], 2, true));

        let stale = pets.begin_fetch(2);
        pets.reset();

        assert!(!pets.complete_fetch(stale, page(2, &["2"], 2, false)));
        assert!(pets.is_empty());
        assert_eq!(pets.current_page, 0);
        assert!(pets.has_more);
        assert!(!pets.is_loading_more);

        assert!(!pets.fail_fetch(stale, "late"));
        assert_eq!(pets.error, None);
    }

    #[test]
    fn test_add_and_remove_pet() {
        let mut pets = PetCollection::new();
        let t = pets.begin_fetch(1);
        pets.complete_fetch(t, page(1, &["1", "2"], 2, false));

        pets.add_pet(pet("new"));
        assert_eq!(ids(&pets), vec!["new", "1", "2"]);
        assert_eq!(pets.total_count, 3);

        assert_eq!(pets.remove_pet("1").map(|p| p.id), Some("1".to_string()));
        assert_eq!(pets.total_count, 2);

        assert!(pets.remove_pet("missing").is_none());
        assert_eq!(pets.total_count, 2);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut pets = PetCollection::new();
        pets.add_pet(pet("1"));

        assert_eq!(pets.toggle_favorite("1"), Some(true));
        assert_eq!(pets.toggle_favorite("1"), Some(false));
        assert_eq!(pets.toggle_favorite("nope"), None);
        assert_eq!(pets.find("1").map(|p| p.is_favorite), Some(false));
    }
}
