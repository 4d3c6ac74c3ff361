//! # Cart Commands
//!
//! Commands behind the cart screen and the header badge.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Checked  │                         │
//! │  │  Cart    │     │          │     │   Out    │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │       ▲                │                 │                              │
//! │       │           add_to_cart        checkout                           │
//! │       │           update_quantity        │                              │
//! │       │           remove_item            │                              │
//! │       │                │                 │                              │
//! │       │                ▼                 │                              │
//! │       └─────────── clear_cart ◄──────────┘                              │
//! │                                    (back to empty)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adding to the cart happens from the listing and discovery screens; see
//! `commands::listing::add_to_cart` and `commands::discovery::add_to_cart`.

use paradise_core::{Cart, CartItem, CartTotals, CheckoutSummary};
use serde::Serialize;
use ts_rs::TS;
use tracing::{debug, info};

use crate::error::{ApiError, Toast};
use crate::state::{CartState, ConfigState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,

    /// Header badge text; empty when the cart is empty
    pub badge: String,

    /// `totals.total` formatted for display
    pub display_total: String,
}

impl CartResponse {
    pub fn new(cart: &Cart, config: &ConfigState) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
            badge: cart.badge_label_with_cap(config.badge_cap),
            display_total: config.format_currency(cart.total()),
        }
    }
}

/// Cart after a change, with the toast to show for it (if any).
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdate {
    pub cart: CartResponse,
    pub toast: Option<Toast>,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub summary: CheckoutSummary,
    pub display_total: String,
    pub toast: Toast,
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Screen                                                           │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  CART                                              3 pets      │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Buddy (Golden Retriever)   [-] 2 [+]          $900.00        │    │
/// │  │  Tweety (Canary)            [-] 1 [+]           $80.00        │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  TOTAL                                         $980.00        │    │
/// │  │  [ Proceed to Checkout ]                                       │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                                                                         │
/// │  get_cart() → { items: [...], totals: {...}, badge: "3" }              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::new(c, config))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - quantity ≤ 0: line removed
/// - quantity above `MAX_ITEM_QUANTITY`: clamped
/// - pet not in cart: no change
pub fn update_quantity(
    cart: &CartState,
    config: &ConfigState,
    pet_id: &str,
    quantity: i64,
) -> CartResponse {
    debug!(pet_id = %pet_id, quantity = %quantity, "update_quantity command");

    cart.with_cart_mut(|c| {
        c.update_quantity(pet_id, quantity);
        CartResponse::new(c, config)
    })
}

/// Removes a pet from the cart.
///
/// The toast is only produced when something was actually removed.
pub fn remove_item(cart: &CartState, config: &ConfigState, pet_id: &str) -> CartUpdate {
    debug!(pet_id = %pet_id, "remove_item command");

    cart.with_cart_mut(|c| {
        let toast = c.remove(pet_id).then(|| {
            Toast::info("Item Removed", "The item has been removed from your cart.")
        });
        CartUpdate {
            cart: CartResponse::new(c, config),
            toast,
        }
    })
}

/// Clears the entire cart.
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartUpdate {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartUpdate {
            cart: CartResponse::new(c, config),
            toast: Some(Toast::info(
                "Cart Cleared",
                "All items have been removed from your cart.",
            )),
        }
    })
}

/// Places the order and empties the cart.
///
/// ## Errors
/// `CART_ERROR` when the cart is empty.
pub fn checkout(cart: &CartState, config: &ConfigState) -> Result<CheckoutResponse, ApiError> {
    debug!("checkout command");

    let summary = cart.with_cart_mut(Cart::checkout)?;
    info!(
        items_count = summary.items_count,
        total_cents = summary.total.cents(),
        "Order placed"
    );

    Ok(CheckoutResponse {
        display_total: config.format_currency(summary.total),
        toast: Toast::success("Checkout Successful!", summary.message.clone()),
        summary,
    })
}
