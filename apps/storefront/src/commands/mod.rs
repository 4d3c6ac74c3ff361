//! # Screen Commands Module
//!
//! Every action a screen can trigger, as plain functions over the state
//! objects.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── listing.rs    ◄─── Pet grid: load, refresh, load more, filter
//! ├── add_pet.rs    ◄─── Add-pet form: fields, image, submit
//! ├── cart.rs       ◄─── Cart screen: quantities, clear, checkout
//! └── discovery.rs  ◄─── Meet a new friend: browse, save, share
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse
//!
//! // Needs the listing and the cart
//! fn add_to_cart(pets: &PetsState, cart: &CartState, pet_id: &str) -> Result<Toast, ApiError>
//!
//! // Needs the listing and a data source
//! async fn load_more(pets: &PetsState, source: &dyn PetSource, page_size: u32)
//! ```
//!
//! Responses and errors are `Serialize`, so a front-end bridge can hand them
//! over as JSON unchanged.

pub mod add_pet;
pub mod cart;
pub mod discovery;
pub mod listing;
