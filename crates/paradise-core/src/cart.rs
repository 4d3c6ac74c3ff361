//! # Cart
//!
//! The shopping cart: pet line items, duplicate merging and totals.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Operations                                 │
//! │                                                                         │
//! │  Shopper Action           Cart Method              State Change         │
//! │  ──────────────           ───────────              ────────────         │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add(&pet) ────────────► qty += 1 or push    │
//! │                                                                         │
//! │  Stepper +/- ────────────► update_quantity() ────► qty = n (≤0 drops)  │
//! │                                                                         │
//! │  Trash icon ─────────────► remove() ─────────────► line dropped        │
//! │                                                                         │
//! │  "Clear Cart" ───────────► clear() ──────────────► items.clear()       │
//! │                                                                         │
//! │  "Checkout" ─────────────► checkout() ───────────► summary + clear     │
//! │                                                                         │
//! │  NOTE: total and items_count are derived on every read, never stored.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Pet;
use crate::{CART_BADGE_CAP, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// One line in the cart.
///
/// The pet is a value copy taken when first added, so later favorite
/// toggles in the listing do not reach into the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub pet: Pet,

    /// Between 1 and [`MAX_ITEM_QUANTITY`]; a line at 0 is removed instead.
    pub quantity: u32,
}

impl CartItem {
    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.pet.price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per pet id (adding the same pet increases quantity)
/// - Every line has quantity ≥ 1
/// - Insertion order is display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one of `pet`, merging with an existing line for the same id.
    ///
    /// A line already at [`MAX_ITEM_QUANTITY`] stays there.
    pub fn add(&mut self, pet: &Pet) {
        if let Some(item) = self.items.iter_mut().find(|i| i.pet.id == pet.id) {
            item.quantity = item.quantity.saturating_add(1).min(MAX_ITEM_QUANTITY);
            return;
        }

        self.items.push(CartItem {
            pet: pet.clone(),
            quantity: 1,
        });
    }

    /// Removes the line for `pet_id`.
    ///
    /// Returns whether a line was removed; an absent id is a no-op.
    pub fn remove(&mut self, pet_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.pet.id != pet_id);
        self.items.len() != initial_len
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line
    /// - above [`MAX_ITEM_QUANTITY`]: clamped to it
    /// - absent id: no-op
    ///
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, pet_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(pet_id);
        }

        let quantity = u32::try_from(quantity)
            .unwrap_or(u32::MAX)
            .min(MAX_ITEM_QUANTITY);
        match self.items.iter_mut().find(|i| i.pet.id == pet_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Σ(price × quantity) over every line.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Σ(quantity): the number of pets in the cart.
    pub fn items_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, i| count.saturating_add(i.quantity))
    }

    /// Number of distinct pets.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up the line for a pet.
    pub fn get(&self, pet_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.pet.id == pet_id)
    }

    /// Text for the header cart badge.
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::cart::Cart;
    ///
    /// assert_eq!(Cart::new().badge_label(), "");
    /// ```
    pub fn badge_label(&self) -> String {
        self.badge_label_with_cap(CART_BADGE_CAP)
    }

    /// Badge text collapsing to `"{cap}+"` above `cap`.
    pub fn badge_label_with_cap(&self, cap: u32) -> String {
        match self.items_count() {
            0 => String::new(),
            n if n > cap => format!("{cap}+"),
            n => n.to_string(),
        }
    }

    /// Places the order and empties the cart.
    ///
    /// ## Errors
    /// [`CoreError::EmptyCart`] when there is nothing to buy; the cart is
    /// left untouched.
    pub fn checkout(&mut self) -> CoreResult<CheckoutSummary> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let summary = CheckoutSummary::for_cart(self);
        self.clear();
        Ok(summary)
    }
}

// =============================================================================
// Totals & Checkout
// =============================================================================

/// Cart totals summary for the cart screen footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub items_count: u32,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            items_count: cart.items_count(),
            total: cart.total(),
        }
    }
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub items_count: u32,
    pub total: Money,
    /// Confirmation shown to the shopper.
    pub message: String,
}

impl CheckoutSummary {
    fn for_cart(cart: &Cart) -> Self {
        let items_count = cart.items_count();
        let noun = if items_count == 1 { "pet" } else { "pets" };
        CheckoutSummary {
            items_count,
            total: cart.total(),
            message: format!("Your order of {items_count} {noun} has been placed."),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PetCategory;

    fn test_pet(id: &str, price_cents: i64) -> Pet {
        Pet::new(
            id,
            format!("Pet {}", id),
            "Mixed",
            1.0,
            Money::from_cents(price_cents),
            PetCategory::Dog,
        )
    }

    #[test]
    fn test_add_same_pet_merges_lines() {
        let mut cart = Cart::new();
        let pet = test_pet("1", 10_000);

        cart.add(&pet);
        cart.add(&pet);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items_count(), 2);
    }

    #[test]
    fn test_total_is_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(&test_pet("1", 1_000));
        cart.add(&test_pet("1", 1_000));
        cart.add(&test_pet("2", 2_550));

        assert_eq!(cart.total(), Money::from_cents(4_550));

        cart.clear();
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.items_count(), 0);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut cart = Cart::new();
        cart.add(&test_pet("b", 100));
        cart.add(&test_pet("a", 100));
        cart.add(&test_pet("b", 100));

        let ids: Vec<_> = cart.items.iter().map(|i| i.pet.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_pet("1", 500));

        assert!(!cart.remove("missing"));
        assert_eq!(cart.line_count(), 1);

        assert!(cart.remove("1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add(&test_pet("1", 500));

        assert!(cart.update_quantity("1", 4));
        assert_eq!(cart.get("1").map(|i| i.quantity), Some(4));
        assert_eq!(cart.total().cents(), 2_000);

        // Absent id does nothing
        assert!(!cart.update_quantity("2", 3));
        assert_eq!(cart.line_count(), 1);

        // Zero or negative removes
        assert!(cart.update_quantity("1", -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_is_capped() {
        let mut cart = Cart::new();
        let pet = test_pet("1", 100);
        cart.add(&pet);

        assert!(cart.update_quantity("1", i64::MAX));
        assert_eq!(cart.get("1").map(|i| i.quantity), Some(MAX_ITEM_QUANTITY));

        cart.add(&pet);
        assert_eq!(cart.get("1").map(|i| i.quantity), Some(MAX_ITEM_QUANTITY));
        assert_eq!(cart.total().cents(), 100 * MAX_ITEM_QUANTITY as i64);
    }

    #[test]
    fn test_huge_lines_do_not_overflow() {
        // Carts can arrive deserialized with quantities past the cap
        let mut cart = Cart::new();
        for id in ["1", "2"] {
            cart.items.push(CartItem {
                pet: test_pet(id, i64::MAX / 2),
                quantity: 3_000_000_000,
            });
        }

        assert_eq!(cart.items_count(), u32::MAX);
        assert_eq!(cart.total(), Money::from_cents(i64::MAX));
        assert_eq!(cart.badge_label(), "99+");
        assert_eq!(cart.checkout().unwrap().items_count, u32::MAX);
    }

    #[test]
    fn test_badge_label() {
        let mut cart = Cart::new();
        let pet = test_pet("1", 100);
        assert_eq!(cart.badge_label(), "");

        cart.add(&pet);
        assert_eq!(cart.badge_label(), "1");

        cart.update_quantity("1", 99);
        assert_eq!(cart.badge_label(), "99");

        cart.update_quantity("1", 100);
        assert_eq!(cart.badge_label(), "99+");
        assert_eq!(cart.badge_label_with_cap(9), "9+");
    }

    #[test]
    fn test_checkout_message_singular() {
        let mut cart = Cart::new();
        cart.add(&test_pet("1", 100));
        assert_eq!(
            cart.checkout().unwrap().message,
            "Your order of 1 pet has been placed."
        );
    }

    #[test]
    fn test_checkout_clears_cart() {
        let mut cart = Cart::new();
        cart.add(&test_pet("1", 30_000));
        cart.add(&test_pet("2", 12_500));
        cart.add(&test_pet("2", 12_500));

        let summary = cart.checkout().unwrap();
        assert_eq!(summary.items_count, 3);
        assert_eq!(summary.total.cents(), 55_000);
        assert_eq!(summary.message, "Your order of 3 pets has been placed.");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let mut cart = Cart::new();
        assert!(matches!(cart.checkout(), Err(CoreError::EmptyCart)));
    }

    #[test]
    fn test_totals_snapshot() {
        let mut cart = Cart::new();
        cart.add(&test_pet("1", 999));
        cart.add(&test_pet("1", 999));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.items_count, 2);
        assert_eq!(totals.total.cents(), 1_998);
    }
}
