//! # Add-Pet Form State
//!
//! The in-progress add-pet form, its inline field errors and the two busy
//! flags the screen disables buttons on.
//!
//! Busy flags are only set through [`AddPetState::try_begin`], whose guard
//! clears the flag when dropped. A command future dropped mid-await (a
//! timeout, a screen closing) therefore never leaves a button disabled.

use std::sync::{Arc, Mutex, PoisonError};

use paradise_core::{FieldErrors, PetCategory, PetField, PetForm};
use serde::Serialize;
use ts_rs::TS;

/// Snapshot of the add-pet screen.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AddPetForm {
    pub values: PetForm,
    pub field_errors: FieldErrors,
    pub is_submitting: bool,
    pub is_fetching_random_image: bool,
}

impl AddPetForm {
    /// A blank form with the category picker on "dog".
    pub fn new() -> Self {
        AddPetForm {
            values: blank_values(),
            field_errors: FieldErrors::new(),
            is_submitting: false,
            is_fetching_random_image: false,
        }
    }

    /// Stores a typed value and clears that field's error.
    pub fn set_field(&mut self, field: PetField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PetField::Name => self.values.name = value,
            PetField::Breed => self.values.breed = value,
            PetField::Age => self.values.age = value,
            PetField::Price => self.values.price = value,
            PetField::ImageUri => self.values.image_uri = value,
            PetField::Category => self.values.category = value,
        }
        self.field_errors.clear(field);
    }

    fn flag_mut(&mut self, flag: BusyFlag) -> &mut bool {
        match flag {
            BusyFlag::Submitting => &mut self.is_submitting,
            BusyFlag::FetchingRandomImage => &mut self.is_fetching_random_image,
        }
    }

    /// Clears values and errors after a successful submission.
    ///
    /// Busy flags are left alone; their owners clear them.
    pub fn reset_values(&mut self) {
        self.values = blank_values();
        self.field_errors = FieldErrors::new();
    }
}

impl Default for AddPetForm {
    fn default() -> Self {
        Self::new()
    }
}

fn blank_values() -> PetForm {
    PetForm {
        category: PetCategory::Dog.as_str().to_string(),
        ..PetForm::default()
    }
}

/// Shared add-pet form state.
#[derive(Debug, Clone, Default)]
pub struct AddPetState {
    form: Arc<Mutex<AddPetForm>>,
}

impl AddPetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AddPetForm) -> R,
    {
        let form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        f(&form)
    }

    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AddPetForm) -> R,
    {
        let mut form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut form)
    }

    pub fn snapshot(&self) -> AddPetForm {
        self.with_form(AddPetForm::clone)
    }

    /// Sets `flag` unless another command already holds it.
    ///
    /// The flag stays set until the returned guard drops.
    pub fn try_begin(&self, flag: BusyFlag) -> Option<BusyGuard<'_>> {
        let acquired = self.with_form_mut(|f| {
            let busy = f.flag_mut(flag);
            if *busy {
                return false;
            }
            *busy = true;
            true
        });

        acquired.then(|| BusyGuard { form: self, flag })
    }
}

// =============================================================================
// Busy Flags
// =============================================================================

/// The add-pet busy flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyFlag {
    Submitting,
    FetchingRandomImage,
}

/// Ownership of one set busy flag; clears it on drop.
#[must_use = "the flag clears as soon as the guard is dropped"]
#[derive(Debug)]
pub struct BusyGuard<'a> {
    form: &'a AddPetState,
    flag: BusyFlag,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let flag = self.flag;
        self.form.with_form_mut(|f| *f.flag_mut(flag) = false);
    }
}
