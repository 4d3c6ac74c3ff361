//! # Remote API Clients
//!
//! Clients for the two optional upstream services.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Remote Endpoints                               │
//! │                                                                         │
//! │  submit_pet()          POST {base_url}/users                            │
//! │                        body:  { name, breed, age, price, imageUri, ... }│
//! │                        reply: { id, createdAt }                         │
//! │                        → merged into a new-arrival Pet                  │
//! │                                                                         │
//! │  random_dog_image()    GET {dog_api_url}/breeds/image/random            │
//! │                        reply: { status: "success", message: <url> }     │
//! │                                                                         │
//! │  Failures carry one human-readable message. No retries.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use paradise_core::{Pet, ValidatedPet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

pub const SUBMIT_FAILED: &str = "Failed to submit pet details";
pub const RANDOM_IMAGE_FAILED: &str = "Failed to fetch random dog image";

// =============================================================================
// Pet API Trait
// =============================================================================

/// Remote operations used by the add-pet screen.
#[async_trait]
pub trait PetApi: Send + Sync {
    /// Submits a validated pet and returns it with the server-assigned id.
    async fn submit_pet(&self, pet: &ValidatedPet) -> CatalogResult<Pet>;

    /// Returns the URL of a random dog photo.
    async fn random_dog_image(&self) -> CatalogResult<String>;
}

// =============================================================================
// Wire Types
// =============================================================================

/// Body of the pet submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitPetRequest<'a> {
    name: &'a str,
    breed: &'a str,
    age: f64,
    /// Major units, as typed into the form.
    price: f64,
    image_uri: &'a str,
    category: &'a str,
}

impl<'a> From<&'a ValidatedPet> for SubmitPetRequest<'a> {
    fn from(pet: &'a ValidatedPet) -> Self {
        SubmitPetRequest {
            name: &pet.name,
            breed: &pet.breed,
            age: pet.age,
            price: pet.price.cents() as f64 / 100.0,
            image_uri: &pet.image_uri,
            category: pet.category.as_str(),
        }
    }
}

/// The fields of the submission reply we keep.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPetResponse {
    pub id: RemoteId,
    pub created_at: DateTime<Utc>,
}

/// Placeholder servers disagree on whether ids are strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RemoteId {
    Text(String),
    Number(i64),
}

impl RemoteId {
    pub fn into_string(self) -> String {
        match self {
            RemoteId::Text(s) => s,
            RemoteId::Number(n) => n.to_string(),
        }
    }
}

/// Reply of the random dog image endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomDogImageResponse {
    pub status: String,
    pub message: String,
}

/// Error bodies sometimes carry a `message` worth showing.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// `reqwest`-backed [`PetApi`].
#[derive(Debug, Clone)]
pub struct HttpPetApi {
    client: reqwest::Client,
    base_url: String,
    dog_api_url: String,
}

impl HttpPetApi {
    /// Builds a client from configuration.
    ///
    /// A timeout is applied only when `api.timeout_secs` is set.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, config))
    }

    /// Uses an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, config: &CatalogConfig) -> Self {
        HttpPetApi {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            dog_api_url: config.api.dog_api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Converts a non-2xx reply into [`CatalogError::Api`].
    async fn api_error(response: reqwest::Response, fallback: &str) -> CatalogError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        warn!(status, message = %message, "Remote API returned an error");
        CatalogError::Api {
            status: Some(status),
            message,
        }
    }

    /// Converts a transport failure into the user-facing message.
    fn transport_error(err: reqwest::Error, fallback: &str) -> CatalogError {
        warn!(error = %err, "Remote API request failed");
        CatalogError::Api {
            status: None,
            message: fallback.to_string(),
        }
    }
}

#[async_trait]
impl PetApi for HttpPetApi {
    async fn submit_pet(&self, pet: &ValidatedPet) -> CatalogResult<Pet> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, name = %pet.name, "Submitting pet");

        let response = self
            .client
            .post(&url)
            .json(&SubmitPetRequest::from(pet))
            .send()
            .await
            .map_err(|e| Self::transport_error(e, SUBMIT_FAILED))?;

        if !response.status().is_success() {
            return Err(Self::api_error(response, SUBMIT_FAILED).await);
        }

        let reply: SubmitPetResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::UnexpectedResponse(e.to_string()))?;

        Ok(Pet::from_validated(
            pet.clone(),
            reply.id.into_string(),
            reply.created_at,
        ))
    }

    async fn random_dog_image(&self) -> CatalogResult<String> {
        let url = format!("{}/breeds/image/random", self.dog_api_url);
        debug!(url = %url, "Fetching random dog image");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::transport_error(e, RANDOM_IMAGE_FAILED))?;

        if !response.status().is_success() {
            return Err(Self::api_error(response, RANDOM_IMAGE_FAILED).await);
        }

        let status = response.status().as_u16();
        let reply: RandomDogImageResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::UnexpectedResponse(e.to_string()))?;

        if reply.status != "success" {
            return Err(CatalogError::Api {
                status: Some(status),
                message: RANDOM_IMAGE_FAILED.to_string(),
            });
        }

        Ok(reply.message)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
