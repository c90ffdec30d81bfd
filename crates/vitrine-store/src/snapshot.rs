//! # Cart Snapshot
//!
//! The immutable view of the cart handed to observers.
//!
//! ## Design Notes
//! A snapshot is built once per mutation, while the authoritative cart is
//! still locked, and then published as a value. Observers never look at the
//! live cart; they only ever hold complete, internally consistent snapshots.
//! `cart_quantity` is derived from the lines at construction time, never
//! maintained incrementally.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitrine_core::{Cart, CartItem};

/// Point-in-time view of the cart for UI consumers.
///
/// ## Serialization
/// This is what the frontend receives on every republish:
/// ```json
/// {
///   "items": [{ "id": 5, "quantity": 2 }],
///   "cartQuantity": 2
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    /// Cart lines in insertion order.
    pub items: Vec<CartItem>,

    /// Sum of all line quantities (the cart badge number).
    pub cart_quantity: u32,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.lines().to_vec(),
            cart_quantity: cart.total_quantity(),
        }
    }
}
