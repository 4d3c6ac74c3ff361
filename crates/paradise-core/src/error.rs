//! # Error Types
//!
//! Domain-specific error types for paradise-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  paradise-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - One violated rule on one field                 │
//! │  └── FieldErrors      - Every field's first violation, for the form    │
//! │                                                                         │
//! │  paradise-catalog errors (separate crate)                              │
//! │  └── CatalogError     - Latency service, HTTP and config failures      │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the front-end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CatalogError → ApiError → Screen  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::types::PetField;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Pet cannot be found in the collection or cart.
    #[error("Pet not found: {0}")]
    PetNotFound(String),

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Page request is not servable.
    ///
    /// ## When This Occurs
    /// - `page` is 0 (pages are 1-based)
    /// - `limit` is 0 (would divide by zero computing total pages)
    #[error("Invalid page request: {reason}")]
    InvalidPageRequest { reason: String },

    /// Pet form failed validation on one or more fields.
    #[error("{0}")]
    InvalidForm(FieldErrors),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single violated validation rule.
///
/// The display text is the message shown inline under the form field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{}", required_message(.field))]
    Required { field: PetField },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: PetField, min: usize },

    /// Field value is too long.
    #[error("{field} must not exceed {max} characters")]
    TooLong { field: PetField, max: usize },

    /// Field value does not parse as a number.
    #[error("{field} must be a number")]
    NotANumber { field: PetField },

    /// Numeric value is below the inclusive minimum.
    #[error("{}", below_minimum_message(.field, .min))]
    BelowMinimum { field: PetField, min: i64 },

    /// Numeric value is above the inclusive maximum.
    #[error("{}", above_maximum_message(.field, .max))]
    AboveMaximum { field: PetField, max: i64 },

    /// Value is not in allowed set.
    #[error("{}", not_allowed_message(.field, .allowed))]
    NotAllowed { field: PetField, allowed: String },
}

impl ValidationError {
    /// Returns the form field this error belongs to.
    pub fn field(&self) -> PetField {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotANumber { field }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::AboveMaximum { field, .. }
            | ValidationError::NotAllowed { field, .. } => *field,
        }
    }
}

// Pickers (image, category) prompt for a selection instead of naming the rule.

fn required_message(field: &PetField) -> String {
    match field {
        PetField::ImageUri => "Please select an image for your pet".to_string(),
        PetField::Category => "Please select a pet category".to_string(),
        _ => format!("{field} is required"),
    }
}

fn below_minimum_message(field: &PetField, min: &i64) -> String {
    match field {
        PetField::Price => format!("{field} must be greater than {}", min.saturating_sub(1)),
        _ => format!("{field} must be a positive number"),
    }
}

fn above_maximum_message(field: &PetField, max: &i64) -> String {
    match field {
        PetField::Age => format!("{field} must be less than {max} years"),
        PetField::Price => format!("{field} seems too high"),
        _ => format!("{field} must be at most {max}"),
    }
}

fn not_allowed_message(field: &PetField, allowed: &str) -> String {
    match field {
        PetField::Category => "Please select a pet category".to_string(),
        _ => format!("{field} must be one of: {allowed}"),
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Per-field validation messages for the pet form.
///
/// Holds at most one message per field: the first rule that field violated.
/// Serializes as a plain `{ "name": "...", "age": "..." }` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldErrors(BTreeMap<PetField, String>);

impl FieldErrors {
    /// Creates an empty set of field errors.
    pub fn new() -> Self {
        FieldErrors(BTreeMap::new())
    }

    /// Records an error unless its field already has one.
    pub fn record(&mut self, error: ValidationError) {
        self.0
            .entry(error.field())
            .or_insert_with(|| error.to_string());
    }

    /// Returns the message for a field, if it failed.
    pub fn get(&self, field: PetField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Drops the message for a field once the user edits it.
    pub fn clear(&mut self, field: PetField) {
        self.0.remove(&field);
    }

    /// Returns true if the field failed.
    pub fn contains(&self, field: PetField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates failed fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (PetField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please fix the errors in the form.")
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
