//! # Discovery State
//!
//! The "meet a new friend" screen walks the loaded listing one pet at a time.
//! The cursor wraps, so it stays valid however the listing grows or shrinks.

use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct Discovery {
    cursor: usize,
    saved: Vec<String>,
}

impl Discovery {
    /// Index of the featured pet in a listing of `len` pets.
    pub fn position(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.cursor % len)
    }

    /// Moves to the next pet, wrapping at the end of the listing.
    pub fn advance(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            self.cursor = 0;
            return None;
        }
        self.cursor = (self.cursor % len + 1) % len;
        Some(self.cursor)
    }

    /// Saves a pet for later. Returns false if it was already saved.
    pub fn save(&mut self, pet_id: &str) -> bool {
        if self.is_saved(pet_id) {
            return false;
        }
        self.saved.push(pet_id.to_string());
        true
    }

    pub fn is_saved(&self, pet_id: &str) -> bool {
        self.saved.iter().any(|id| id == pet_id)
    }

    /// Saved pet ids, oldest first.
    pub fn saved(&self) -> &[String] {
        &self.saved
    }
}

/// Shared discovery state.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryState {
    inner: Arc<Mutex<Discovery>>,
}

impl DiscoveryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_discovery<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Discovery) -> R,
    {
        let discovery = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&discovery)
    }

    pub fn with_discovery_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Discovery) -> R,
    {
        let mut discovery = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut discovery)
    }
}
