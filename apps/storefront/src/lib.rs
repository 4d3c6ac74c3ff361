//! # Pet Paradise Storefront Library
//!
//! Session state and screen commands for the Pet Paradise storefront.
//! A mobile or desktop shell binds its screens to the functions in
//! [`commands`]; the `storefront` binary drives a scripted session instead.
//!
//! ## Module Organization
//! ```text
//! paradise_storefront/
//! ├── lib.rs          ◄─── You are here (Storefront root & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state
//! │   ├── pets.rs     ◄─── Listing state + filter
//! │   ├── form.rs     ◄─── Add-pet form state
//! │   ├── discovery.rs◄─── Discovery cursor + saved list
//! │   └── config.rs   ◄─── Display configuration
//! ├── commands/
//! │   ├── listing.rs  ◄─── Pet grid commands
//! │   ├── add_pet.rs  ◄─── Add-pet commands
//! │   ├── cart.rs     ◄─── Cart commands
//! │   └── discovery.rs◄─── Discovery commands
//! ├── picker.rs       ◄─── Camera / gallery seam
//! └── error.rs        ◄─── API error + toast types
//! ```
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront (app root)                                │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌───────────────┐  │
//! │  │  CartState   │ │  PetsState   │ │ AddPetState  │ │DiscoveryState │  │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └───────────────┘  │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────────────┐ ┌──────────────────────┐    │
//! │  │ ConfigState  │ │ Arc<dyn PetSource>   │ │ Option<Arc<dyn       │    │
//! │  │              │ │ (MockCatalog)        │ │   PetApi>>           │    │
//! │  └──────────────┘ └──────────────────────┘ └──────────────────────┘    │
//! │                                                                         │
//! │  Built once at startup; commands borrow only what they need.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod picker;
pub mod state;

use std::sync::Arc;

use paradise_catalog::{CatalogConfig, HttpPetApi, MockCatalog, PetApi, PetSource};
use paradise_core::PetField;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{AddPetState, CartState, ConfigState, DiscoveryState, PetsState};

/// The application root: every state object plus the data sources.
pub struct Storefront {
    pub cart: CartState,
    pub pets: PetsState,
    pub add_pet: AddPetState,
    pub discovery: DiscoveryState,
    pub config: ConfigState,
    catalog_config: CatalogConfig,
    source: Arc<dyn PetSource>,
    api: Option<Arc<dyn PetApi>>,
}

impl Storefront {
    /// Creates a storefront over explicit data sources.
    pub fn new(
        catalog_config: CatalogConfig,
        config: ConfigState,
        source: Arc<dyn PetSource>,
        api: Option<Arc<dyn PetApi>>,
    ) -> Self {
        Storefront {
            cart: CartState::new(),
            pets: PetsState::new(),
            add_pet: AddPetState::new(),
            discovery: DiscoveryState::new(),
            config,
            catalog_config,
            source,
            api,
        }
    }

    /// Creates the standard storefront: the seed mock catalog and the HTTP API.
    pub fn from_config(catalog_config: CatalogConfig, config: ConfigState) -> Result<Self, ApiError> {
        let source: Arc<dyn PetSource> = Arc::new(MockCatalog::from_config(&catalog_config));
        let api: Arc<dyn PetApi> = Arc::new(HttpPetApi::new(&catalog_config)?);
        Ok(Self::new(catalog_config, config, source, Some(api)))
    }

    /// Page size for listing requests.
    pub fn page_size(&self) -> u32 {
        self.catalog_config.page_size()
    }

    /// The listing data source.
    pub fn source(&self) -> &dyn PetSource {
        self.source.as_ref()
    }

    /// The remote API, if one is configured.
    pub fn api(&self) -> Option<&dyn PetApi> {
        self.api.as_deref()
    }

    /// The API new pets are submitted through.
    ///
    /// `None` unless remote submission is enabled; pets are then created
    /// locally.
    pub fn submit_api(&self) -> Option<&dyn PetApi> {
        if self.catalog_config.api.remote_submit {
            self.api()
        } else {
            None
        }
    }
}

/// Runs a scripted storefront session.
///
/// ## Session Script
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Demo Session                                      │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,paradise=debug; override with RUST_LOG              │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • CatalogConfig: defaults → catalog.toml → PARADISE_* env           │
/// │     • ConfigState: defaults → PARADISE_STORE_NAME / _CURRENCY_*         │
/// │                                                                         │
/// │  3. Browse ───────────────────────────────────────────────────────────► │
/// │     • load_first_page, cat chip, all chip, load_more, cart two pets     │
/// │                                                                         │
/// │  4. List a Pet ───────────────────────────────────────────────────────► │
/// │     • fill the form, submit (locally unless remote_submit is on)        │
/// │                                                                         │
/// │  5. Discover & Check Out ─────────────────────────────────────────────► │
/// │     • next_friend, save_for_later, share, checkout                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// The only network calls made are remote submission and the random image
/// fetch, both gated on `remote_submit`.
pub async fn run() -> Result<(), ApiError> {
    init_tracing();

    let catalog_config = CatalogConfig::load_or_default(None);
    let config = ConfigState::from_env();
    info!(
        store = %config.store_name,
        currency = %config.currency_code,
        "Starting Pet Paradise storefront"
    );

    let store = Storefront::from_config(catalog_config, config)?;
    let page_size = store.page_size();

    // Browse
    let listing = commands::listing::load_first_page(&store.pets, store.source(), page_size).await?;
    info!(loaded = listing.items.len(), total = listing.total_count, "First page loaded");

    let cats =
        commands::listing::select_category(&store.pets, store.source(), page_size, "cat").await?;
    info!(cats = cats.total_count, "Cat chip selected");
    commands::listing::select_category(&store.pets, store.source(), page_size, "all").await?;

    let listing = commands::listing::load_more(&store.pets, store.source(), page_size).await?;
    info!(loaded = listing.items.len(), has_more = listing.has_more, "Listing extended");

    let picks: Vec<String> = listing.items.iter().take(2).map(|p| p.id.clone()).collect();
    for pet_id in &picks {
        let toast = commands::listing::add_to_cart(&store.pets, &store.cart, pet_id)?;
        info!(title = %toast.title, "{}", toast.message);
    }

    // List a pet
    if let Some(api) = store.submit_api() {
        match commands::add_pet::fetch_random_image(&store.add_pet, api).await {
            Ok(form) => info!(image = %form.values.image_uri, "Random image fetched"),
            Err(e) => warn!(error = %e, "Random image unavailable"),
        }
    }
    for (field, value) in [
        (PetField::Name, "Pepper"),
        (PetField::Breed, "Border Collie"),
        (PetField::Age, "2"),
        (PetField::Price, "650"),
        (PetField::Category, "dog"),
    ] {
        commands::add_pet::update_field(&store.add_pet, field, value.to_string());
    }
    if store.add_pet.with_form(|f| f.values.image_uri.is_empty()) {
        commands::add_pet::update_field(
            &store.add_pet,
            PetField::ImageUri,
            "file:///pets/pepper.jpg".to_string(),
        );
    }
    match commands::add_pet::submit_pet(&store.add_pet, &store.pets, store.submit_api()).await {
        Ok(response) => info!(pet_id = %response.pet.id, "{}", response.toast.message),
        Err(e) => warn!(error = %e, "Submission failed"),
    }

    // Discover
    if let Some(pet) = commands::discovery::next_friend(&store.pets, &store.discovery) {
        info!(name = %pet.name, breed = %pet.breed, "Featured pet");
    }
    if let Some(toast) = commands::discovery::save_for_later(&store.pets, &store.discovery) {
        info!(title = %toast.title, "{}", toast.message);
    }
    if let Some(share) =
        commands::discovery::share_message(&store.pets, &store.discovery, &store.config)
    {
        info!(title = %share.title, "{}", share.message);
    }

    // Check out
    let cart = commands::cart::get_cart(&store.cart, &store.config);
    info!(badge = %cart.badge, total = %cart.display_total, "Cart ready");

    let order = commands::cart::checkout(&store.cart, &store.config)?;
    info!(title = %order.toast.title, total = %order.display_total, "{}", order.toast.message);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=paradise=trace` - Show trace for paradise crates only
/// - Default: INFO, DEBUG for paradise crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,paradise=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .try_init();
}
