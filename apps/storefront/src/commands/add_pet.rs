//! # Add-Pet Commands
//!
//! Commands behind the add-pet form.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    submit_pet                                           │
//! │                                                                         │
//! │  validate_pet_form(values)                                              │
//! │         │                                                               │
//! │         ├── Err(FieldErrors) ──► store inline errors ──► VALIDATION_ERROR│
//! │         │                                                               │
//! │         ▼                                                               │
//! │  isSubmitting = true    (BusyGuard)                                     │
//! │         │                                                               │
//! │         ├── remote api ──► PetApi::submit_pet().await                   │
//! │         └── local ───────► Pet::create_local() (uuid, now)              │
//! │         │                                                               │
//! │  isSubmitting = false   ◄── on every path, including a dropped future   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  insert at top of listing, reset form, "Success!" toast                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use paradise_catalog::PetApi;
use paradise_core::validation::validate_pet_form;
use paradise_core::{CoreError, FieldErrors, Pet, PetField};
use serde::Serialize;
use ts_rs::TS;
use tracing::{debug, info, warn};

use crate::error::{ApiError, Toast};
use crate::picker::{ImagePicker, ImageSource};
use crate::state::{AddPetForm, AddPetState, BusyFlag, PetsState};

/// A successfully listed pet.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub pet: Pet,
    pub toast: Toast,
}

/// Returns the current form.
pub fn get_form(form: &AddPetState) -> AddPetForm {
    debug!("get_form command");
    form.snapshot()
}

/// Stores one typed value and clears that field's inline error.
pub fn update_field(form: &AddPetState, field: PetField, value: String) -> AddPetForm {
    debug!(field = ?field, "update_field command");

    form.with_form_mut(|f| {
        f.set_field(field, value);
        f.clone()
    })
}

/// Validates and lists the pet on the form.
///
/// ## Arguments
/// * `api` - remote submission endpoint; `None` creates the pet locally
///
/// ## Errors
/// - `VALIDATION_ERROR` with `fieldErrors` when any field fails
/// - `VALIDATION_ERROR` when a submission is already running
/// - `NETWORK_ERROR` when the remote submission fails
pub async fn submit_pet(
    form: &AddPetState,
    pets: &PetsState,
    api: Option<&dyn PetApi>,
) -> Result<SubmitResponse, ApiError> {
    debug!(remote = api.is_some(), "submit_pet command");

    let submitting = form
        .try_begin(BusyFlag::Submitting)
        .ok_or_else(|| ApiError::validation("A submission is already in progress"))?;

    let validated = form.with_form_mut(|f| match validate_pet_form(&f.values) {
        Ok(validated) => {
            f.field_errors = FieldErrors::new();
            Ok(validated)
        }
        Err(errors) => {
            f.field_errors = errors.clone();
            Err(ApiError::from(CoreError::InvalidForm(errors)))
        }
    })?;

    let created = match api {
        Some(api) => api.submit_pet(&validated).await.map_err(ApiError::from),
        None => Ok(Pet::create_local(validated)),
    };

    drop(submitting);

    let pet = created.inspect_err(|e| warn!(error = %e, "Pet submission failed"))?;

    pets.with_pets_mut(|p| p.add_pet(pet.clone()));
    form.with_form_mut(AddPetForm::reset_values);
    info!(pet_id = %pet.id, name = %pet.name, "Pet listed");

    Ok(SubmitResponse {
        toast: Toast::success(
            "Success!",
            format!("{} has been added to the pet shop.", pet.name),
        ),
        pet,
    })
}

/// Picks a photo from the camera or gallery into the form.
///
/// A cancelled pick leaves the form unchanged.
///
/// ## Errors
/// `PERMISSION_DENIED` (a blocking alert) when access is refused.
pub async fn pick_image(
    form: &AddPetState,
    picker: &dyn ImagePicker,
    source: ImageSource,
) -> Result<AddPetForm, ApiError> {
    debug!(source = ?source, "pick_image command");

    match picker.pick(source).await? {
        Some(uri) => Ok(form.with_form_mut(|f| {
            f.set_field(PetField::ImageUri, uri);
            f.clone()
        })),
        None => {
            debug!("Image pick cancelled");
            Ok(form.snapshot())
        }
    }
}

/// Fills the image field with a random dog photo.
///
/// Returns the form unchanged if a fetch is already running.
pub async fn fetch_random_image(
    form: &AddPetState,
    api: &dyn PetApi,
) -> Result<AddPetForm, ApiError> {
    debug!("fetch_random_image command");

    let Some(fetching) = form.try_begin(BusyFlag::FetchingRandomImage) else {
        return Ok(form.snapshot());
    };

    let fetched = api.random_dog_image().await;
    drop(fetching);

    form.with_form_mut(|f| match fetched {
        Ok(uri) => {
            f.set_field(PetField::ImageUri, uri);
            Ok(f.clone())
        }
        Err(e) => Err(ApiError::from(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::picker::PickError;
    use async_trait::async_trait;
    use chrono::Utc;
    use paradise_catalog::{CatalogError, CatalogResult};
    use paradise_core::{Money, PetCategory, PetStatus, ValidatedPet};
    use std::time::Duration;
    use tokio::time::{sleep, timeout};

    struct FakeApi {
        fail: bool,
    }

    #[async_trait]
    impl PetApi for FakeApi {
        async fn submit_pet(&self, pet: &ValidatedPet) -> CatalogResult<Pet> {
            if self.fail {
                return Err(CatalogError::Api {
                    status: Some(500),
                    message: "Failed to submit pet details".into(),
                });
            }
            Ok(Pet::from_validated(pet.clone(), "remote-7", Utc::now()))
        }

        async fn random_dog_image(&self) -> CatalogResult<String> {
            if self.fail {
                return Err(CatalogError::Api {
                    status: None,
                    message: "Failed to fetch random dog image".into(),
                });
            }
            Ok("https://images.dog.ceo/breeds/hound/1.jpg".into())
        }
    }

    /// Never answers within a test's timeout.
    struct StalledApi;

    #[async_trait]
    impl PetApi for StalledApi {
        async fn submit_pet(&self, pet: &ValidatedPet) -> CatalogResult<Pet> {
            sleep(Duration::from_secs(60)).await;
            Ok(Pet::from_validated(pet.clone(), "late", Utc::now()))
        }

        async fn random_dog_image(&self) -> CatalogResult<String> {
            sleep(Duration::from_secs(60)).await;
            Ok("https://images.dog.ceo/breeds/pug/late.jpg".into())
        }
    }

    enum FakePicker {
        Picks(&'static str),
        Cancels,
        Denies,
    }

    #[async_trait]
    impl ImagePicker for FakePicker {
        async fn pick(&self, source: ImageSource) -> Result<Option<String>, PickError> {
            match self {
                FakePicker::Picks(uri) => Ok(Some(uri.to_string())),
                FakePicker::Cancels => Ok(None),
                FakePicker::Denies => Err(PickError::PermissionDenied(source)),
            }
        }
    }

    fn filled_form() -> AddPetState {
        let form = AddPetState::new();
        update_field(&form, PetField::Name, "Rex".into());
        update_field(&form, PetField::Breed, "Labrador".into());
        update_field(&form, PetField::Age, "3".into());
        update_field(&form, PetField::Price, "450".into());
        update_field(&form, PetField::ImageUri, "file:///rex.jpg".into());
        form
    }

    #[tokio::test]
    async fn test_local_submit_lists_pet_first() {
        let form = filled_form();
        let pets = PetsState::new();
        let older = Pet::new("old", "Old", "Mutt", 5.0, Money::zero(), PetCategory::Other);
        pets.with_pets_mut(|p| p.add_pet(older));

        let response = submit_pet(&form, &pets, None).await.unwrap();

        assert_eq!(response.pet.name, "Rex");
        assert_eq!(response.pet.status, PetStatus::NewArrival);
        assert_eq!(response.pet.id.len(), 36);
        assert_eq!(response.toast.title, "Success!");
        assert_eq!(response.toast.message, "Rex has been added to the pet shop.");

        pets.with_pets(|p| {
            assert_eq!(p.items[0].id, response.pet.id);
            assert_eq!(p.total_count, 2);
        });

        let after = get_form(&form);
        assert!(after.values.name.is_empty());
        assert!(!after.is_submitting);
    }

    #[tokio::test]
    async fn test_remote_submit_uses_server_id() {
        let form = filled_form();
        let pets = PetsState::new();
        let api = FakeApi { fail: false };

        let response = submit_pet(&form, &pets, Some(&api)).await.unwrap();
        assert_eq!(response.pet.id, "remote-7");
    }

    #[tokio::test]
    async fn test_invalid_form_reports_every_field() {
        let form = AddPetState::new();
        update_field(&form, PetField::Name, "A".into());
        let pets = PetsState::new();

        let err = submit_pet(&form, &pets, None).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.to_toast().title, "Validation Error");
        let errors = err.field_errors.unwrap();
        assert!(errors.contains(PetField::Name));
        assert!(errors.contains(PetField::Breed));
        assert!(!errors.contains(PetField::Category));

        let snapshot = get_form(&form);
        assert!(snapshot.field_errors.contains(PetField::Name));
        assert!(!snapshot.is_submitting);
        assert!(pets.with_pets(|p| p.is_empty()));
    }

    #[tokio::test]
    async fn test_failed_submit_clears_flag_and_keeps_form() {
        let form = filled_form();
        let pets = PetsState::new();
        let api = FakeApi { fail: true };

        let err = submit_pet(&form, &pets, Some(&api)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NetworkError);
        assert_eq!(err.message, "Failed to submit pet details");

        let snapshot = get_form(&form);
        assert!(!snapshot.is_submitting);
        assert_eq!(snapshot.values.name, "Rex");
        assert!(pets.with_pets(|p| p.is_empty()));
    }

    #[tokio::test]
    async fn test_submit_rejected_while_submitting() {
        let form = filled_form();
        form.with_form_mut(|f| f.is_submitting = true);

        let err = submit_pet(&form, &PetsState::new(), None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.field_errors.is_none());
    }

    #[tokio::test]
    async fn test_pick_image() {
        let form = AddPetState::new();
        form.with_form_mut(|f| {
            f.field_errors.record(paradise_core::ValidationError::Required {
                field: PetField::ImageUri,
            })
        });

        let picked = pick_image(&form, &FakePicker::Picks("file:///a.jpg"), ImageSource::Gallery)
            .await
            .unwrap();
        assert_eq!(picked.values.image_uri, "file:///a.jpg");
        assert!(!picked.field_errors.contains(PetField::ImageUri));

        let cancelled = pick_image(&form, &FakePicker::Cancels, ImageSource::Camera)
            .await
            .unwrap();
        assert_eq!(cancelled.values.image_uri, "file:///a.jpg");
    }

    #[tokio::test]
    async fn test_pick_image_permission_denied() {
        let form = AddPetState::new();
        let err = pick_image(&form, &FakePicker::Denies, ImageSource::Camera)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::PermissionDenied);
        assert!(err.is_blocking());
        assert_eq!(err.message, "Sorry, we need camera permissions to take photos.");
    }

    #[tokio::test]
    async fn test_fetch_random_image() {
        let form = AddPetState::new();

        let filled = fetch_random_image(&form, &FakeApi { fail: false }).await.unwrap();
        assert_eq!(
            filled.values.image_uri,
            "https://images.dog.ceo/breeds/hound/1.jpg"
        );
        assert!(!filled.is_fetching_random_image);

        let err = fetch_random_image(&form, &FakeApi { fail: true })
            .await
            .unwrap_err();
        assert_eq!(err.message, "Failed to fetch random dog image");
        assert!(!get_form(&form).is_fetching_random_image);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_out_submit_can_be_retried() {
        let form = filled_form();
        let pets = PetsState::new();

        let timed_out =
            timeout(Duration::from_secs(1), submit_pet(&form, &pets, Some(&StalledApi))).await;
        assert!(timed_out.is_err());

        let snapshot = get_form(&form);
        assert!(!snapshot.is_submitting);
        assert_eq!(snapshot.values.name, "Rex");
        assert!(pets.with_pets(|p| p.is_empty()));

        let response = submit_pet(&form, &pets, Some(&FakeApi { fail: false }))
            .await
            .unwrap();
        assert_eq!(response.pet.id, "remote-7");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_out_random_image_can_be_retried() {
        let form = AddPetState::new();

        let timed_out =
            timeout(Duration::from_secs(1), fetch_random_image(&form, &StalledApi)).await;
        assert!(timed_out.is_err());
        assert!(!get_form(&form).is_fetching_random_image);

        let filled = fetch_random_image(&form, &FakeApi { fail: false }).await.unwrap();
        assert_eq!(
            filled.values.image_uri,
            "https://images.dog.ceo/breeds/hound/1.jpg"
        );
    }

    #[tokio::test]
    async fn test_invalid_submit_releases_flag() {
        let form = AddPetState::new();
        let pets = PetsState::new();

        for _ in 0..2 {
            let err = submit_pet(&form, &pets, None).await.unwrap_err();
            assert!(err.field_errors.is_some());
            assert!(!get_form(&form).is_submitting);
        }
    }
}
