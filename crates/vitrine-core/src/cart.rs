//! # Cart Transition Rules
//!
//! Pure state transitions for the shopping cart.
//!
//! ## Replace, Don't Mutate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Transition Discipline                           │
//! │                                                                         │
//! │  UI Action                 Transition                Result             │
//! │  ─────────                 ──────────                ──────             │
//! │                                                                         │
//! │  Click "+" ──────────────► with_increased(id) ─────► new Cart value     │
//! │                                                                         │
//! │  Click "-" ──────────────► with_decreased(id) ─────► new Cart value     │
//! │                                                                         │
//! │  Click "Remove" ─────────► without(id) ────────────► new Cart value     │
//! │                                                                         │
//! │  Read badge count ───────► total_quantity() ───────► (read only)        │
//! │                                                                         │
//! │  NOTE: Every transition takes `&self` and returns the successor cart.   │
//! │        The caller decides when the successor replaces the current one,  │
//! │        so observers only ever see complete states.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - A product id appears on at most one line.
//! - Every line has quantity ≥ 1; a line that would reach 0 is removed.
//! - Lines keep insertion order (the order carries no meaning).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CartError;
use crate::types::ProductId;
use crate::validation::validate_lines;

// =============================================================================
// Cart Line Item
// =============================================================================

/// One line of the cart: a distinct product and how many of it are held.
///
/// The cart deliberately stores nothing else. Display data (name, price,
/// imagery) belongs to the catalog and is looked up by the UI per id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product this line refers to.
    pub id: ProductId,

    /// How many units are in the cart. Always ≥ 1.
    pub quantity: u32,
}

impl CartItem {
    /// Creates a cart line.
    pub const fn new(id: ProductId, quantity: u32) -> Self {
        CartItem { id, quantity }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An ordered collection of cart lines.
///
/// ## Design Notes
/// Lines are not reachable mutably from outside this crate. All transitions
/// derive a fresh `Cart` from the previous one, which keeps the published
/// state trivially safe to hand to observers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    /// Lines in insertion order.
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub const fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from externally supplied lines.
    ///
    /// ## Behavior
    /// Rejects line lists that violate the cart invariants: a zero-quantity
    /// line or a product id appearing more than once. Use this for cart data
    /// crossing back into the crate (e.g. a payload echoed by the frontend);
    /// carts produced by the transitions below never need re-validation.
    pub fn from_lines(lines: Vec<CartItem>) -> Result<Self, CartError> {
        validate_lines(&lines)?;
        Ok(Cart { items: lines })
    }

    // =========================================================================
    // Pure Reads
    // =========================================================================

    /// Returns the quantity held for `id`, or 0 if the product is not in the
    /// cart. Pure read.
    pub fn item_quantity(&self, id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|line| line.id == id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Returns the total quantity across all lines.
    ///
    /// Recomputed on every call rather than maintained incrementally; the
    /// cart is small enough that a sum is cheaper than keeping a counter
    /// honest.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Returns the number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> &[CartItem] {
        &self.items
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Returns the cart with one more unit of `id`.
    ///
    /// ## Behavior
    /// - Product not in cart: a new `{id, quantity: 1}` line is appended.
    /// - Product already in cart: that line's quantity grows by 1.
    pub fn with_increased(&self, id: ProductId) -> Cart {
        if self.item_quantity(id) == 0 {
            let mut items = self.items.clone();
            items.push(CartItem::new(id, 1));
            return Cart { items };
        }

        Cart {
            items: self
                .items
                .iter()
                .map(|line| {
                    if line.id == id {
                        CartItem::new(id, line.quantity + 1)
                    } else {
                        *line
                    }
                })
                .collect(),
        }
    }

    /// Returns the cart with one unit of `id` taken away.
    ///
    /// ## Behavior
    /// - Quantity is exactly 1: the line is removed entirely (a cart never
    ///   holds a zero-quantity line).
    /// - Quantity is greater than 1: the line's quantity shrinks by 1.
    /// - Product not in cart: the cart is returned unchanged. This is a
    ///   deliberate no-op, not an error.
    pub fn with_decreased(&self, id: ProductId) -> Cart {
        match self.item_quantity(id) {
            0 => self.clone(),
            1 => self.without(id),
            _ => Cart {
                items: self
                    .items
                    .iter()
                    .map(|line| {
                        if line.id == id {
                            CartItem::new(id, line.quantity - 1)
                        } else {
                            *line
                        }
                    })
                    .collect(),
            },
        }
    }

    /// Returns the cart without any line for `id`, regardless of quantity.
    /// Removing an absent product is a no-op.
    pub fn without(&self, id: ProductId) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .filter(|line| line.id != id)
                .copied()
                .collect(),
        }
    }

    /// Returns an empty cart.
    ///
    /// ## When Used
    /// The owning flow restarts (e.g. the shopper finished elsewhere and the
    /// session begins again with a clean slate).
    pub fn cleared(&self) -> Cart {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================


// =============================================================================
// Property Tests
// =============================================================================
