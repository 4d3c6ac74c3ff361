//! # Validation Module
//!
//! Input validation for the add-pet form and listing requests.
//!
//! ## Pet Form Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field      Rule                          Example failure               │
//! │  ─────────  ────────────────────────────  ───────────────────────────   │
//! │  name       2–50 characters               "A"                           │
//! │  breed      2–50 characters               ""                            │
//! │  age        number, 0–30                  "-1", "abc"                   │
//! │  price      number, 1–1,000,000           "0", "2000000"                │
//! │  imageUri   non-empty                     ""                            │
//! │  category   dog | cat | bird | other      "fish"                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field is checked, so the form can show all problems at once.
//! Each field reports only its first violated rule.
//!
//! ## Usage
//! ```rust
//! use paradise_core::types::{PetField, PetForm};
//! use paradise_core::validation::validate_pet_form;
//!
//! let form = PetForm {
//!     name: "A".into(),
//!     breed: "Valid Breed".into(),
//!     age: "5".into(),
//!     price: "100".into(),
//!     image_uri: "x".into(),
//!     category: "dog".into(),
//! };
//!
//! let errors = validate_pet_form(&form).unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert!(errors.contains(PetField::Name));
//! ```

use crate::error::{CoreError, CoreResult, FieldErrors, ValidationError};
use crate::money::Money;
use crate::types::{PetCategory, PetField, PetForm, ValidatedPet};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const MIN_AGE_YEARS: i64 = 0;
pub const MAX_AGE_YEARS: i64 = 30;
/// Price bounds in whole currency units.
pub const MIN_PRICE: i64 = 1;
pub const MAX_PRICE: i64 = 1_000_000;

// =============================================================================
// Form Validation
// =============================================================================

/// Validates the whole add-pet form.
///
/// ## Returns
/// - `Ok(ValidatedPet)` with parsed, trimmed values
/// - `Err(FieldErrors)` with one message per failing field
pub fn validate_pet_form(form: &PetForm) -> Result<ValidatedPet, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = collect(&mut errors, validate_text(PetField::Name, &form.name));
    let breed = collect(&mut errors, validate_text(PetField::Breed, &form.breed));
    let age = collect(&mut errors, validate_age(&form.age));
    let price = collect(&mut errors, validate_price(&form.price));
    let image_uri = collect(&mut errors, validate_image_uri(&form.image_uri));
    let category = collect(&mut errors, form.category.parse::<PetCategory>());

    match (name, breed, age, price, image_uri, category) {
        (Some(name), Some(breed), Some(age), Some(price), Some(image_uri), Some(category)) => {
            Ok(ValidatedPet {
                name,
                breed,
                age,
                price,
                image_uri,
                category,
            })
        }
        _ => Err(errors),
    }
}

fn collect<T>(errors: &mut FieldErrors, result: ValidationResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.record(e);
            None
        }
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a short free-text field (name, breed).
///
/// Length is counted in characters after trimming, so "Zoë" is 3.
pub fn validate_text(field: PetField, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    let len = value.chars().count();

    if len < NAME_MIN_CHARS {
        return Err(ValidationError::TooShort {
            field,
            min: NAME_MIN_CHARS,
        });
    }

    if len > NAME_MAX_CHARS {
        return Err(ValidationError::TooLong {
            field,
            max: NAME_MAX_CHARS,
        });
    }

    Ok(value.to_string())
}

/// Validates age in years (fractions allowed).
pub fn validate_age(value: &str) -> ValidationResult<f64> {
    let age: f64 = value
        .trim()
        .parse()
        .ok()
        .filter(|a: &f64| a.is_finite())
        .ok_or(ValidationError::NotANumber {
            field: PetField::Age,
        })?;

    if age < MIN_AGE_YEARS as f64 {
        return Err(ValidationError::BelowMinimum {
            field: PetField::Age,
            min: MIN_AGE_YEARS,
        });
    }

    if age > MAX_AGE_YEARS as f64 {
        return Err(ValidationError::AboveMaximum {
            field: PetField::Age,
            max: MAX_AGE_YEARS,
        });
    }

    Ok(age)
}

/// Validates the asking price.
pub fn validate_price(value: &str) -> ValidationResult<Money> {
    let price: Money = value.parse().map_err(|_| ValidationError::NotANumber {
        field: PetField::Price,
    })?;

    if price < Money::from_major(MIN_PRICE) {
        return Err(ValidationError::BelowMinimum {
            field: PetField::Price,
            min: MIN_PRICE,
        });
    }

    if price > Money::from_major(MAX_PRICE) {
        return Err(ValidationError::AboveMaximum {
            field: PetField::Price,
            max: MAX_PRICE,
        });
    }

    Ok(price)
}

/// Validates that an image was picked.
pub fn validate_image_uri(value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: PetField::ImageUri,
        });
    }
    Ok(value.to_string())
}

// =============================================================================
// Listing Validators
// =============================================================================

/// Validates pagination parameters.
///
/// ## Rules
/// - `page` is 1-based
/// - `limit` must be positive
pub fn validate_page_request(page: u32, limit: u32) -> CoreResult<()> {
    if page == 0 {
        return Err(CoreError::InvalidPageRequest {
            reason: "page must be at least 1".to_string(),
        });
    }

    if limit == 0 {
        return Err(CoreError::InvalidPageRequest {
            reason: "limit must be greater than 0".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
