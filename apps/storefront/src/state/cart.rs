//! # Cart State
//!
//! Owns the shopper's cart for the lifetime of the app.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because the listing, discovery and
//! cart screens all write to it, and only one of them may do so at a time.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Screen Action            Command                 Cart State Change     │
//! │  ─────────────            ───────                 ─────────────────     │
//! │                                                                         │
//! │  Tap "Add to Cart" ──────► add_to_cart() ───────► qty += 1 or push     │
//! │                                                                         │
//! │  Stepper +/- ────────────► update_quantity() ───► items[i].qty = n     │
//! │                                                                         │
//! │  Trash icon ─────────────► remove_item() ───────► items.remove(i)      │
//! │                                                                         │
//! │  "Clear Cart" ───────────► clear_cart() ────────► items.clear()        │
//! │                                                                         │
//! │  View Cart ──────────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        The lock is never held across an .await.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use paradise_core::Cart;

/// Shared cart state.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&pet));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paradise_core::{Money, Pet, PetCategory};

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::new();
        let other = state.clone();
        let pet = Pet::new("1", "Rex", "Lab", 2.0, Money::from_major(100), PetCategory::Dog);

        other.with_cart_mut(|cart| cart.add(&pet));

        assert_eq!(state.with_cart(|cart| cart.items_count()), 1);
    }
}
