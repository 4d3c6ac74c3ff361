//! # State Module
//!
//! Application state for the storefront.
//!
//! Each screen concern gets its own state type instead of one global store,
//! so commands declare exactly which state they touch.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront (app root)                        │   │
//! │  │  owns one of each state, plus the PetSource and PetApi          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌─────────────┬──────────┼──────────┬──────────────┐               │
//! │     ▼             ▼          ▼          ▼              ▼                │
//! │  ┌────────┐  ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌───────────┐       │
//! │  │ Cart   │  │ Pets    │ │ AddPet  │ │ Discovery │ │ Config    │       │
//! │  │ State  │  │ State   │ │ State   │ │ State     │ │ State     │       │
//! │  │        │  │         │ │         │ │           │ │           │       │
//! │  │ Cart   │  │ PetColl │ │ form +  │ │ cursor +  │ │ currency, │       │
//! │  │        │  │ +filter │ │ flags   │ │ saved ids │ │ badge cap │       │
//! │  └────────┘  └─────────┘ └─────────┘ └───────────┘ └───────────┘       │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Mutable states: Arc<Mutex<T>>, locked briefly, never across .await   │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod discovery;
mod form;
mod pets;

pub use cart::CartState;
pub use config::ConfigState;
pub use discovery::{Discovery, DiscoveryState};
pub use form::{AddPetForm, AddPetState, BusyFlag, BusyGuard};
pub use pets::{ListingFilter, PendingFetch, PetsState};
