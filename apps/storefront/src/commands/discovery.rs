//! # Discovery Commands
//!
//! Commands behind the "meet a new friend" screen, which features one pet
//! from the loaded listing at a time.
//!
//! Every command is a no-op returning `None` while the listing is empty.

use paradise_core::Pet;
use serde::Serialize;
use ts_rs::TS;
use tracing::debug;

use crate::error::Toast;
use crate::state::{CartState, ConfigState, DiscoveryState, PetsState};

/// Result of tapping the heart on the featured pet.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteUpdate {
    pub is_favorite: bool,

    /// Only produced when the pet became a favorite
    pub toast: Option<Toast>,
}

/// Payload for the OS share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ShareContent {
    pub title: String,
    pub message: String,
}

/// The featured pet.
pub fn current_pet(pets: &PetsState, discovery: &DiscoveryState) -> Option<Pet> {
    debug!("current_pet command");

    pets.with_pets(|p| {
        let index = discovery.with_discovery(|d| d.position(p.len()))?;
        p.items.get(index).cloned()
    })
}

/// Features the next pet, wrapping back to the first.
pub fn next_friend(pets: &PetsState, discovery: &DiscoveryState) -> Option<Pet> {
    debug!("next_friend command");

    pets.with_pets(|p| {
        let index = discovery.with_discovery_mut(|d| d.advance(p.len()))?;
        p.items.get(index).cloned()
    })
}

/// Adds the featured pet to the saved list.
///
/// Saving the same pet twice is silent.
pub fn save_for_later(pets: &PetsState, discovery: &DiscoveryState) -> Option<Toast> {
    debug!("save_for_later command");

    let pet = current_pet(pets, discovery)?;
    discovery
        .with_discovery_mut(|d| d.save(&pet.id))
        .then(|| {
            Toast::success(
                "Saved for Later",
                format!("{} has been saved to your list!", pet.name),
            )
        })
}

/// Flips the featured pet's favorite flag in the listing.
pub fn toggle_favorite(pets: &PetsState, discovery: &DiscoveryState) -> Option<FavoriteUpdate> {
    debug!("discovery toggle_favorite command");

    let pet = current_pet(pets, discovery)?;
    let is_favorite = pets.with_pets_mut(|p| p.toggle_favorite(&pet.id))?;

    Some(FavoriteUpdate {
        is_favorite,
        toast: is_favorite.then(|| {
            Toast::success(
                "Added to Favorites",
                format!("{} has been added to your favorites!", pet.name),
            )
        }),
    })
}

/// Builds the share sheet text for the featured pet.
pub fn share_message(
    pets: &PetsState,
    discovery: &DiscoveryState,
    config: &ConfigState,
) -> Option<ShareContent> {
    debug!("share_message command");

    let pet = current_pet(pets, discovery)?;
    Some(ShareContent {
        title: format!("Meet {}!", pet.name),
        message: format!(
            "Check out this amazing {} named {}! Available for adoption at {}.",
            pet.breed,
            pet.name,
            config.format_currency(pet.price)
        ),
    })
}

/// Adds the featured pet to the cart.
pub fn add_to_cart(
    pets: &PetsState,
    discovery: &DiscoveryState,
    cart: &CartState,
) -> Option<Toast> {
    debug!("discovery add_to_cart command");

    let pet = current_pet(pets, discovery)?;
    cart.with_cart_mut(|c| c.add(&pet));

    Some(Toast::success(
        "Added to Cart",
        format!("{} has been added to your cart!", pet.name),
    ))
}
