//! # Listing Commands
//!
//! Commands behind the home screen: the paginated pet grid, pull-to-refresh,
//! infinite scroll, category chips and search.
//!
//! ## Loading Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Listing Loading Flow                                 │
//! │                                                                         │
//! │  Screen mount ──────► load_first_page() ──► page 1 replaces items      │
//! │                                                                         │
//! │  Pull to refresh ───► refresh() ──────────► reset, then page 1         │
//! │                                                                         │
//! │  Scroll near end ───► load_more() ────────► next page appended         │
//! │                          │                                              │
//! │                          └── no-op while loading or when !hasMore      │
//! │                                                                         │
//! │  Category chip ─────► select_category() ──► reset, then page 1         │
//! │  Search box ────────► set_filter()                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every fetch goes through a [`PendingFetch`]; a command future dropped
//! mid-await (a timeout, a screen unmounting) releases its loading flag.

use paradise_catalog::PetSource;
use paradise_core::PetCollection;
use tracing::{debug, warn};

use crate::error::{ApiError, Toast};
use crate::state::{CartState, ListingFilter, PendingFetch, PetsState};

/// Loads page 1 under the current filter, replacing the listing.
pub async fn load_first_page(
    pets: &PetsState,
    source: &dyn PetSource,
    page_size: u32,
) -> Result<PetCollection, ApiError> {
    debug!(page_size = %page_size, "load_first_page command");
    fetch_into(pets, source, pets.begin_fetch(1), page_size).await
}

/// Pull-to-refresh: drops everything loaded so far and reloads page 1.
///
/// Fetches still in flight from before the refresh are discarded when
/// they land.
pub async fn refresh(
    pets: &PetsState,
    source: &dyn PetSource,
    page_size: u32,
) -> Result<PetCollection, ApiError> {
    debug!("refresh command");
    pets.with_pets_mut(PetCollection::reset);
    fetch_into(pets, source, pets.begin_fetch(1), page_size).await
}

/// Appends the next page.
///
/// Returns the listing unchanged while a load is in flight or once every
/// pet has been loaded.
pub async fn load_more(
    pets: &PetsState,
    source: &dyn PetSource,
    page_size: u32,
) -> Result<PetCollection, ApiError> {
    let Some(pending) = pets.begin_next_page() else {
        debug!("load_more skipped");
        return Ok(pets.with_pets(PetCollection::clone));
    };

    debug!(page = %pending.page(), "load_more command");
    fetch_into(pets, source, pending, page_size).await
}

/// Applies a new category/search filter and reloads page 1.
pub async fn set_filter(
    pets: &PetsState,
    source: &dyn PetSource,
    page_size: u32,
    filter: ListingFilter,
) -> Result<PetCollection, ApiError> {
    debug!(category = ?filter.category, query = %filter.query, "set_filter command");
    pets.set_filter(filter);
    fetch_into(pets, source, pets.begin_fetch(1), page_size).await
}

/// Category chip tap: `"all"` or a category name. The search text is kept.
///
/// ## Errors
/// `VALIDATION_ERROR` for an unknown category; the listing is left alone.
pub async fn select_category(
    pets: &PetsState,
    source: &dyn PetSource,
    page_size: u32,
    chip: &str,
) -> Result<PetCollection, ApiError> {
    debug!(chip = %chip, "select_category command");

    let filter = pets
        .filter()
        .with_chip(chip)
        .map_err(|e| ApiError::validation(e.to_string()))?;
    set_filter(pets, source, page_size, filter).await
}

/// Flips a pet's favorite heart in the listing.
///
/// ## Returns
/// The new favorite value.
pub fn toggle_favorite(pets: &PetsState, pet_id: &str) -> Result<bool, ApiError> {
    debug!(pet_id = %pet_id, "toggle_favorite command");

    pets.with_pets_mut(|p| p.toggle_favorite(pet_id))
        .ok_or_else(|| ApiError::not_found("Pet", pet_id))
}

/// Adds a listed pet to the cart.
pub fn add_to_cart(pets: &PetsState, cart: &CartState, pet_id: &str) -> Result<Toast, ApiError> {
    debug!(pet_id = %pet_id, "add_to_cart command");

    let pet = pets
        .with_pets(|p| p.find(pet_id).cloned())
        .ok_or_else(|| ApiError::not_found("Pet", pet_id))?;

    cart.with_cart_mut(|c| c.add(&pet));

    Ok(Toast::success(
        "Added to Cart",
        format!("{} has been added to your cart.", pet.name),
    ))
}

/// Runs one started fetch to completion.
///
/// The filter is read after the ticket is issued, so a filter change
/// racing this call always makes the ticket stale.
async fn fetch_into(
    pets: &PetsState,
    source: &dyn PetSource,
    pending: PendingFetch<'_>,
    page_size: u32,
) -> Result<PetCollection, ApiError> {
    let page = pending.page();
    let request = pets.filter().request(page, page_size);

    match source.fetch_page(&request).await {
        Ok(result) => {
            if !pending.complete(result) {
                debug!(page = %page, "Discarding stale page");
            }
            Ok(pets.with_pets(PetCollection::clone))
        }
        Err(e) => {
            let err = ApiError::from(e);
            if !pending.fail(err.message.clone()) {
                debug!(page = %page, "Discarding stale failure");
                return Ok(pets.with_pets(PetCollection::clone));
            }
            warn!(page = %page, error = %err, "Failed to load pets");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use paradise_catalog::{CatalogError, CatalogResult, MockCatalog};
    use paradise_core::{Money, PageRequest, Pet, PetCategory, PetPage};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    fn catalog() -> MockCatalog {
        MockCatalog::new(Duration::ZERO)
    }

    struct FailingSource;

    #[async_trait]
    impl PetSource for FailingSource {
        async fn fetch_page(&self, _request: &PageRequest) -> CatalogResult<PetPage> {
            Err(CatalogError::Api {
                status: Some(503),
                message: "Service unavailable".into(),
            })
        }
    }

    #[tokio::test]
    async fn test_load_then_load_more() {
        let pets = PetsState::new();
        let source = catalog();

        let first = load_first_page(&pets, &source, 5).await.unwrap();
        assert_eq!(first.items.len(), 5);
        assert!(first.has_more);
        assert!(!first.is_loading);

        let second = load_more(&pets, &source, 5).await.unwrap();
        let ids: Vec<_> = second.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert_eq!(second.current_page, 2);
        assert!(!second.has_more);
        assert!(!second.is_loading_more);
    }

    #[tokio::test]
    async fn test_load_more_is_noop_when_exhausted() {
        let pets = PetsState::new();
        let source = catalog();

        load_first_page(&pets, &source, 10).await.unwrap();
        let after = load_more(&pets, &source, 10).await.unwrap();

        assert_eq!(after.items.len(), 8);
        assert_eq!(after.current_page, 1);
    }

    #[tokio::test]
    async fn test_failure_sets_error_and_clears_flags() {
        let pets = PetsState::new();

        let err = load_first_page(&pets, &FailingSource, 10).await.unwrap_err();
        assert_eq!(err.message, "Service unavailable");

        pets.with_pets(|p| {
            assert_eq!(p.error.as_deref(), Some("Service unavailable"));
            assert!(!p.is_loading);
            assert!(p.items.is_empty());
        });
    }

    #[tokio::test]
    async fn test_failed_load_more_keeps_items() {
        let pets = PetsState::new();
        load_first_page(&pets, &catalog(), 5).await.unwrap();

        load_more(&pets, &FailingSource, 5).await.unwrap_err();

        pets.with_pets(|p| {
            assert_eq!(p.items.len(), 5);
            assert!(!p.is_loading_more);
            assert!(p.error.is_some());
        });
    }

    #[tokio::test]
    async fn test_set_filter_reloads_from_page_one() {
        let pets = PetsState::new();
        let source = catalog();
        load_first_page(&pets, &source, 10).await.unwrap();

        let cats = set_filter(
            &pets,
            &source,
            10,
            ListingFilter {
                category: Some(PetCategory::Cat),
                query: String::new(),
            },
        )
        .await
        .unwrap();

        assert!(cats.items.iter().all(|p| p.category == PetCategory::Cat));
        assert_eq!(cats.total_count, 2);

        let search = set_filter(
            &pets,
            &source,
            10,
            ListingFilter {
                category: None,
                query: "BEAGLE".into(),
            },
        )
        .await
        .unwrap();
        let names: Vec<_> = search.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Charlie"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_discards_in_flight_page() {
        let pets = PetsState::new();
        let slow: Arc<dyn PetSource> = Arc::new(MockCatalog::new(Duration::from_millis(1_000)));
        let fast = catalog();

        let stale = {
            let pets = pets.clone();
            let slow = Arc::clone(&slow);
            tokio::spawn(async move {
                let filter = ListingFilter {
                    category: Some(PetCategory::Bird),
                    query: String::new(),
                };
                set_filter(&pets, slow.as_ref(), 10, filter).await
            })
        };
        while pets.filter().category != Some(PetCategory::Bird) || !pets.with_pets(|p| p.is_loading)
        {
            tokio::task::yield_now().await;
        }

        pets.set_filter(ListingFilter::default());
        let fresh = load_first_page(&pets, &fast, 10).await.unwrap();
        assert_eq!(fresh.items.len(), 8);

        stale.await.unwrap().unwrap();

        pets.with_pets(|p| {
            assert_eq!(p.items.len(), 8);
            assert!(!p.is_loading);
        });
    }

    #[tokio::test]
    async fn test_toggle_favorite() {
        let pets = PetsState::new();
        load_first_page(&pets, &catalog(), 10).await.unwrap();

        assert!(toggle_favorite(&pets, "3").unwrap());
        assert!(!toggle_favorite(&pets, "3").unwrap());

        let err = toggle_favorite(&pets, "missing").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_add_to_cart_merges_and_toasts() {
        let pets = PetsState::new();
        let cart = CartState::new();
        load_first_page(&pets, &catalog(), 10).await.unwrap();

        let toast = add_to_cart(&pets, &cart, "1").unwrap();
        add_to_cart(&pets, &cart, "1").unwrap();

        assert_eq!(toast.title, "Added to Cart");
        assert_eq!(toast.message, "Buddy has been added to your cart.");
        cart.with_cart(|c| {
            assert_eq!(c.line_count(), 1);
            assert_eq!(c.items_count(), 2);
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_out_first_page_does_not_wedge_listing() {
        let pets = PetsState::new();
        let slow = MockCatalog::new(Duration::from_secs(5));

        let timed_out =
            timeout(Duration::from_millis(100), load_first_page(&pets, &slow, 5)).await;
        assert!(timed_out.is_err());

        pets.with_pets(|p| {
            assert!(!p.is_loading);
            assert_eq!(p.error, None);
            assert_eq!(p.next_page(), Some(1));
        });

        let reloaded = load_first_page(&pets, &catalog(), 5).await.unwrap();
        assert_eq!(reloaded.items.len(), 5);
        let more = load_more(&pets, &catalog(), 5).await.unwrap();
        assert_eq!(more.items.len(), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_out_load_more_can_be_retried() {
        let pets = PetsState::new();
        load_first_page(&pets, &catalog(), 5).await.unwrap();

        let slow = MockCatalog::new(Duration::from_secs(5));
        let timed_out = timeout(Duration::from_millis(100), load_more(&pets, &slow, 5)).await;
        assert!(timed_out.is_err());
        assert!(!pets.with_pets(|p| p.is_loading_more));

        let more = load_more(&pets, &catalog(), 5).await.unwrap();
        assert_eq!(more.items.len(), 8);
        assert_eq!(more.current_page, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_load_more_fetches_page_once() {
        let pets = PetsState::new();
        load_first_page(&pets, &catalog(), 5).await.unwrap();

        let slow = MockCatalog::new(Duration::from_millis(500));
        let (a, b) = tokio::join!(load_more(&pets, &slow, 5), load_more(&pets, &slow, 5));
        a.unwrap();
        b.unwrap();

        pets.with_pets(|p| {
            let ids: Vec<_> = p.items.iter().map(|pet| pet.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
            assert_eq!(p.total_count, 8);
        });
    }

    #[tokio::test]
    async fn test_local_pet_counted_after_load_more() {
        let pets = PetsState::new();
        let source = catalog();
        load_first_page(&pets, &source, 5).await.unwrap();

        let local = Pet::new(
            "local",
            "Pepper",
            "Collie",
            2.0,
            Money::from_major(650),
            PetCategory::Dog,
        );
        pets.with_pets_mut(|p| p.add_pet(local));

        let listing = load_more(&pets, &source, 5).await.unwrap();
        assert_eq!(listing.items.len(), 9);
        assert_eq!(listing.total_count, 9);
    }

    #[tokio::test]
    async fn test_select_category_chip() {
        let pets = PetsState::new();
        let source = catalog();

        let birds = select_category(&pets, &source, 10, "Bird").await.unwrap();
        assert!(birds.items.iter().all(|p| p.category == PetCategory::Bird));
        assert_eq!(pets.filter().category, Some(PetCategory::Bird));

        let err = select_category(&pets, &source, 10, "fish").await.unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
        assert_eq!(err.message, "Please select a pet category");
        assert_eq!(pets.filter().category, Some(PetCategory::Bird));

        let all = select_category(&pets, &source, 10, "all").await.unwrap();
        assert_eq!(all.items.len(), 8);
    }
}
