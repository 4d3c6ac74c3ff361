//! # API Error Type
//!
//! Unified error type for storefront commands, plus the toast notifications
//! commands hand back to the screen.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Pet Paradise                           │
//! │                                                                         │
//! │  Screen                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  submit_pet(form)                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Form invalid? ──── CoreError::InvalidForm ──────┐              │  │
//! │  │         │                                        │              │  │
//! │  │         ▼                                        ▼              │  │
//! │  │  Remote failed? ─── CatalogError::Api ──────── ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { code: "VALIDATION_ERROR",                                            │
//! │    message: "Please fix the errors in the form.",                       │
//! │    fieldErrors: { name: "Pet name must be at least 2 characters" } }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Severity
//! - Validation errors block submission and are shown inline per field
//! - Network errors are one transient toast; nothing is retried
//! - Permission denials are a blocking alert
//!
//! Nothing here is fatal: every command restores its loading flags before
//! returning an error.

use paradise_catalog::CatalogError;
use paradise_core::{CoreError, FieldErrors};
use serde::Serialize;
use ts_rs::TS;

use crate::picker::PickError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Pet not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field messages when a form failed validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// A remote call failed or answered with an error
    NetworkError,

    /// Camera or photo library access was refused
    PermissionDenied,

    /// Pet not in the listing or cart
    NotFound,

    /// Cart operation failed
    CartError,

    /// Configuration could not be loaded or is invalid
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field_errors: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a validation error carrying every failed form field.
    pub fn invalid_form(errors: FieldErrors) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: errors.to_string(),
            field_errors: Some(errors),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NetworkError, message)
    }

    /// Creates a permission denied error.
    pub fn permission_denied(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::PermissionDenied, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Returns true if the screen should block on an alert instead of a toast.
    pub fn is_blocking(&self) -> bool {
        self.code == ErrorCode::PermissionDenied
    }

    /// The notification a screen shows for this error.
    pub fn to_toast(&self) -> Toast {
        let title = match self.code {
            ErrorCode::ValidationError => "Validation Error",
            ErrorCode::NetworkError => "Request Failed",
            ErrorCode::PermissionDenied => "Permission Required",
            ErrorCode::NotFound => "Not Found",
            ErrorCode::CartError => "Cart Error",
            ErrorCode::ConfigError => "Configuration Error",
            ErrorCode::Internal => "Something Went Wrong",
        };
        Toast::error(title, self.message.clone())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PetNotFound(id) => ApiError::not_found("Pet", &id),
            CoreError::EmptyCart => ApiError::cart("Your cart is empty"),
            CoreError::InvalidPageRequest { reason } => ApiError::validation(reason),
            CoreError::InvalidForm(errors) => ApiError::invalid_form(errors),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidConfig(_)
            | CatalogError::InvalidUrl(_)
            | CatalogError::ConfigLoadFailed(_) => {
                ApiError::new(ErrorCode::ConfigError, err.to_string())
            }
            CatalogError::Http(e) => {
                tracing::warn!("HTTP request failed: {}", e);
                ApiError::network("Network request failed")
            }
            CatalogError::Api { message, .. } => ApiError::network(message),
            CatalogError::UnexpectedResponse(detail) => {
                tracing::warn!("Unexpected remote response: {}", detail);
                ApiError::network("An unexpected error occurred")
            }
            CatalogError::InvalidRequest(core) => ApiError::from(core),
        }
    }
}

/// Converts image picker errors to API errors.
impl From<PickError> for ApiError {
    fn from(err: PickError) -> Self {
        match err {
            PickError::PermissionDenied(_) => ApiError::permission_denied(err.to_string()),
            PickError::Failed(_) => ApiError::internal(err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Toast Notifications
// =============================================================================

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A transient notification for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}
