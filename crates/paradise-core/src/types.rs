//! # Domain Types
//!
//! Core domain types used throughout Pet Paradise.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    PetForm      │   │  ValidatedPet   │   │      Pet        │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  raw user text  │──►│  typed fields   │──►│  id, createdAt  │       │
//! │  │  (age: "5")     │   │  (age: 5.0)     │   │  status, fav    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │        validate_pet_form()      Pet::from_validated()                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  PetCategory    │   │   PetStatus     │   │    PetField     │       │
//! │  │  Dog, Cat,      │   │  Available      │   │  form field     │       │
//! │  │  Bird, Other    │   │  NewArrival     │   │  keys for       │       │
//! │  │                 │   │  Sold           │   │  error messages │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Pet Category
// =============================================================================

/// The kind of animal a listing is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PetCategory {
    Dog,
    Cat,
    Bird,
    Other,
}

impl PetCategory {
    /// Every category, in the order the form offers them.
    pub const ALL: [PetCategory; 4] = [
        PetCategory::Dog,
        PetCategory::Cat,
        PetCategory::Bird,
        PetCategory::Other,
    ];

    /// Lowercase wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PetCategory::Dog => "dog",
            PetCategory::Cat => "cat",
            PetCategory::Bird => "bird",
            PetCategory::Other => "other",
        }
    }

    /// Parses a listing filter where `"all"` (or blank) means no filter.
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::types::PetCategory;
    ///
    /// assert_eq!(PetCategory::parse_filter("all").unwrap(), None);
    /// assert_eq!(PetCategory::parse_filter("Cat").unwrap(), Some(PetCategory::Cat));
    /// assert!(PetCategory::parse_filter("fish").is_err());
    /// ```
    pub fn parse_filter(s: &str) -> Result<Option<PetCategory>, ValidationError> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        s.parse().map(Some)
    }

    fn allowed_list() -> String {
        PetCategory::ALL
            .iter()
            .map(PetCategory::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dog" => Ok(PetCategory::Dog),
            "cat" => Ok(PetCategory::Cat),
            "bird" => Ok(PetCategory::Bird),
            "other" => Ok(PetCategory::Other),
            _ => Err(ValidationError::NotAllowed {
                field: PetField::Category,
                allowed: PetCategory::allowed_list(),
            }),
        }
    }
}

// =============================================================================
// Pet Status
// =============================================================================

/// Lifecycle status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum PetStatus {
    /// Listed and purchasable.
    #[default]
    Available,
    /// Recently added through the add-pet form.
    NewArrival,
    /// No longer purchasable.
    Sold,
}

// =============================================================================
// Pet Field
// =============================================================================

/// Identifies a pet form field, used as the key of validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum PetField {
    Name,
    Breed,
    Age,
    Price,
    ImageUri,
    Category,
}

impl PetField {
    /// Human label used at the start of validation messages.
    pub const fn label(&self) -> &'static str {
        match self {
            PetField::Name => "Pet name",
            PetField::Breed => "Breed",
            PetField::Age => "Age",
            PetField::Price => "Price",
            PetField::ImageUri => "Image",
            PetField::Category => "Category",
        }
    }
}

impl fmt::Display for PetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Pet
// =============================================================================

/// A sellable animal listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Unique identifier: client-generated UUID or server-assigned id.
    pub id: String,

    pub name: String,

    pub breed: String,

    /// Age in years; fractional values allowed (0.5 = six months).
    pub age: f64,

    /// Asking price.
    pub price: Money,

    /// Photo location (device file URI or remote URL).
    pub image_uri: String,

    /// When the listing was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    pub category: PetCategory,

    pub status: PetStatus,

    /// Whether the shopper marked this pet as a favorite.
    pub is_favorite: bool,
}

impl Pet {
    /// Creates an available, non-favorite pet with no image.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        breed: impl Into<String>,
        age: f64,
        price: Money,
        category: PetCategory,
    ) -> Self {
        Pet {
            id: id.into(),
            name: name.into(),
            breed: breed.into(),
            age,
            price,
            image_uri: String::new(),
            created_at: Utc::now(),
            category,
            status: PetStatus::Available,
            is_favorite: false,
        }
    }

    /// Builds a freshly submitted listing from validated form input.
    ///
    /// New listings always start as [`PetStatus::NewArrival`] and not favorited.
    pub fn from_validated(
        pet: ValidatedPet,
        id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Pet {
            id: id.into(),
            name: pet.name,
            breed: pet.breed,
            age: pet.age,
            price: pet.price,
            image_uri: pet.image_uri,
            created_at,
            category: pet.category,
            status: PetStatus::NewArrival,
            is_favorite: false,
        }
    }

    /// Creates a listing on the device, with a fresh UUID and the current time.
    pub fn create_local(pet: ValidatedPet) -> Self {
        Pet::from_validated(pet, Uuid::new_v4().to_string(), Utc::now())
    }

    pub fn with_image(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = image_uri.into();
        self
    }

    pub fn with_status(mut self, status: PetStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Case-insensitive substring match against name or breed.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.breed.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Pet Form
// =============================================================================

/// The add-pet form exactly as the user typed it.
///
/// Numeric fields stay text until validation so "abc" in the age box
/// produces a field message instead of a parse failure elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PetForm {
    pub name: String,
    pub breed: String,
    pub age: String,
    pub price: String,
    pub image_uri: String,
    pub category: String,
}

/// Form input that passed every validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedPet {
    pub name: String,
    pub breed: String,
    pub age: f64,
    pub price: Money,
    pub image_uri: String,
    pub category: PetCategory,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("dog".parse::<PetCategory>().unwrap(), PetCategory::Dog);
        assert_eq!(" BIRD ".parse::<PetCategory>().unwrap(), PetCategory::Bird);

        let err = "fish".parse::<PetCategory>().unwrap_err();
        assert_eq!(err.to_string(), "Please select a pet category");
        assert_eq!(
            err,
            ValidationError::NotAllowed {
                field: PetField::Category,
                allowed: "dog, cat, bird, other".to_string(),
            }
        );
    }

    #[test]
    fn test_pet_wire_shape() {
        let pet = Pet::new("7", "Mango", "Cockatiel", 0.5, Money::from_cents(15_000), PetCategory::Bird)
            .with_status(PetStatus::NewArrival);

        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["imageUri"], "");
        assert_eq!(json["isFavorite"], false);
        assert_eq!(json["status"], "new-arrival");
        assert_eq!(json["category"], "bird");
        assert_eq!(json["price"], 15_000);
    }

    #[test]
    fn test_from_validated_marks_new_arrival() {
        let validated = ValidatedPet {
            name: "Rex".into(),
            breed: "Lab".into(),
            age: 2.0,
            price: Money::from_major(300),
            image_uri: "file:///rex.jpg".into(),
            category: PetCategory::Dog,
        };

        let pet = Pet::from_validated(validated, "abc", Utc::now());
        assert_eq!(pet.id, "abc");
        assert_eq!(pet.status, PetStatus::NewArrival);
        assert!(!pet.is_favorite);
    }

    #[test]
    fn test_create_local_assigns_uuid() {
        let validated = ValidatedPet {
            name: "Mochi".into(),
            breed: "Shiba Inu".into(),
            age: 1.0,
            price: Money::from_major(900),
            image_uri: "file:///mochi.jpg".into(),
            category: PetCategory::Dog,
        };

        let a = Pet::create_local(validated.clone());
        let b = Pet::create_local(validated);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_matches_query_on_name_or_breed() {
        let pet = Pet::new("1", "Buddy", "Golden Retriever", 3.0, Money::from_major(800), PetCategory::Dog);
        assert!(pet.matches_query("bud"));
        assert!(pet.matches_query("golden"));
        assert!(!pet.matches_query("poodle"));
    }
}
