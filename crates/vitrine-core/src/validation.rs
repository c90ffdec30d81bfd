//! # Validation Module
//!
//! Invariant checks for cart line lists.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                              │
//! │                                                                         │
//! │  Carts built by this crate's transitions                               │
//! │  └── Never re-validated: transitions preserve the invariants           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Line lists crossing INTO the crate                                    │
//! │  ├── Frontend echoes a cart payload back                               │
//! │  └── THIS MODULE: reject anything a transition could not have built    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::cart::CartItem;
use crate::error::{CartError, CartResult};

/// Validates a list of cart lines against the cart invariants.
///
/// ## Rules
/// - Every line must have quantity ≥ 1
/// - A product id may appear on at most one line
///
/// Order is not checked; any order is a valid cart.
pub fn validate_lines(lines: &[CartItem]) -> CartResult<()> {
    for (index, line) in lines.iter().enumerate() {
        if line.quantity == 0 {
            return Err(CartError::EmptyLine { id: line.id });
        }

        if lines[..index].iter().any(|earlier| earlier.id == line.id) {
            return Err(CartError::DuplicateLine { id: line.id });
        }
    }

    Ok(())
}
