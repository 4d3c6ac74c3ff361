//! # paradise-core: Pure Storefront Logic for Pet Paradise
//!
//! This crate is the **heart** of Pet Paradise. It contains the pet, cart and
//! listing state model as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Pet Paradise Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile Front-end                             │   │
//! │  │    Listing ──► Add Pet ──► Cart ──► Discovery                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Storefront Commands (apps/storefront)           │   │
//! │  │    load_more, submit_pet, add_to_cart, checkout, etc.           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ paradise-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐  │   │
//! │  │   │  types  │ │  cart   │ │  pets   │ │pagination│ │validat.│  │   │
//! │  │   │  Pet    │ │  Cart   │ │  Pet    │ │ paginate │ │ form   │  │   │
//! │  │   │ PetForm │ │CartItem │ │Collectn │ │ PetPage  │ │ rules  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              paradise-catalog (Data Access Layer)               │   │
//! │  │        Mock catalog with latency, placeholder REST clients      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Pet, PetForm, categories, statuses)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart line items, duplicate merging, totals
//! - [`pets`] - Paginated pet collection with loading flags
//! - [`pagination`] - Catalog filtering and page slicing
//! - [`validation`] - Pet form validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use paradise_core::cart::Cart;
//! use paradise_core::money::Money;
//! use paradise_core::types::{Pet, PetCategory};
//!
//! let rex = Pet::new("1", "Rex", "Labrador", 2.0, Money::from_cents(50_000), PetCategory::Dog);
//!
//! let mut cart = Cart::new();
//! cart.add(&rex);
//! cart.add(&rex);
//!
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.items_count(), 2);
//! assert_eq!(cart.total().cents(), 100_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pagination;
pub mod pets;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals, CheckoutSummary};
pub use error::{CoreError, CoreResult, FieldErrors, ValidationError};
pub use money::Money;
pub use pagination::{paginate, PageRequest, PetPage};
pub use pets::{FetchTicket, PetCollection};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page size used by the listing screen when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest count shown on the cart badge before it collapses to "99+".
pub const CART_BADGE_CAP: u32 = 99;

/// Largest quantity a single cart line can hold.
pub const MAX_ITEM_QUANTITY: u32 = 999;
