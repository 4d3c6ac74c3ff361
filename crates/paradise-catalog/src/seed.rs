//! # Seed Catalog
//!
//! The fixed in-memory list of pets served by [`MockCatalog`](crate::MockCatalog).
//!
//! Eight listings across every category:
//! - Dogs: Buddy, Max, Charlie
//! - Cats: Whiskers, Luna
//! - Birds: Tweety, Kiwi
//! - Other: Nibbles
//!
//! Timestamps are fixed so page contents are stable between runs.

use chrono::{DateTime, Utc};
use paradise_core::{Money, Pet, PetCategory, PetStatus};

/// (id, name, breed, age, price in cents, category, status, image)
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    f64,
    i64,
    PetCategory,
    PetStatus,
    &'static str,
);

const SEED_PETS: &[SeedRow] = &[
    (
        "1",
        "Buddy",
        "Golden Retriever",
        2.0,
        120_000,
        PetCategory::Dog,
        PetStatus::Available,
        "https://images.dog.ceo/breeds/retriever-golden/n02099601_3004.jpg",
    ),
    (
        "2",
        "Whiskers",
        "Persian",
        3.0,
        80_000,
        PetCategory::Cat,
        PetStatus::Available,
        "https://cdn2.thecatapi.com/images/persian.jpg",
    ),
    (
        "3",
        "Max",
        "German Shepherd",
        1.5,
        150_000,
        PetCategory::Dog,
        PetStatus::NewArrival,
        "https://images.dog.ceo/breeds/germanshepherd/n02106662_1203.jpg",
    ),
    (
        "4",
        "Tweety",
        "Canary",
        0.5,
        15_000,
        PetCategory::Bird,
        PetStatus::Available,
        "https://images.example.com/birds/canary.jpg",
    ),
    (
        "5",
        "Luna",
        "Siamese",
        2.0,
        95_000,
        PetCategory::Cat,
        PetStatus::NewArrival,
        "https://cdn2.thecatapi.com/images/siamese.jpg",
    ),
    (
        "6",
        "Charlie",
        "Beagle",
        4.0,
        70_000,
        PetCategory::Dog,
        PetStatus::Available,
        "https://images.dog.ceo/breeds/beagle/n02088364_11136.jpg",
    ),
    (
        "7",
        "Kiwi",
        "Budgerigar",
        1.0,
        5_000,
        PetCategory::Bird,
        PetStatus::Sold,
        "https://images.example.com/birds/budgie.jpg",
    ),
    (
        "8",
        "Nibbles",
        "Holland Lop",
        1.0,
        12_000,
        PetCategory::Other,
        PetStatus::Available,
        "https://images.example.com/small/holland-lop.jpg",
    ),
];

/// Seconds since the epoch of the first listing (2024-01-01T00:00:00Z).
const SEED_EPOCH: i64 = 1_704_067_200;

/// One day between consecutive listings.
const SEED_SPACING_SECS: i64 = 86_400;

/// Builds the seed catalog, in listing order.
pub fn seed_pets() -> Vec<Pet> {
    SEED_PETS
        .iter()
        .zip(0i64..)
        .map(|(row, index)| {
            let (id, name, breed, age, cents, category, status, image) = *row;
            Pet::new(id, name, breed, age, Money::from_cents(cents), category)
                .with_status(status)
                .with_image(image)
                .with_created_at(seed_timestamp(index))
        })
        .collect()
}

fn seed_timestamp(index: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(SEED_EPOCH + index * SEED_SPACING_SECS, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_shape() {
        let pets = seed_pets();
        assert_eq!(pets.len(), 8);

        let ids: HashSet<_> = pets.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 8);

        let dogs = pets.iter().filter(|p| p.category == PetCategory::Dog).count();
        assert_eq!(dogs, 3);
        assert!(pets.iter().all(|p| p.price.is_positive() && !p.is_favorite));
    }

    #[test]
    fn test_seed_is_stable() {
        assert_eq!(seed_pets(), seed_pets());
        assert_eq!(seed_pets()[0].created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }
}
