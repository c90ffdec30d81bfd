//! # Error Types
//!
//! Invariant-violation errors for vitrine-core.
//!
//! ## Where Errors Can Happen
//! The cart transitions themselves are total: increasing, decreasing and
//! removing are defined for every id, present or not. The only fallible
//! point in this crate is the validated construction boundary, where a line
//! list from outside the crate is turned into a `Cart`.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending product id)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::ProductId;

/// Violations of the cart invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A line carries quantity 0.
    ///
    /// A cart never retains zero-quantity lines; a transition that would
    /// reach 0 removes the line instead. Seeing one in incoming data means
    /// the producer built the payload by hand.
    #[error("cart line for product {id} has zero quantity")]
    EmptyLine { id: ProductId },

    /// The same product id appears on more than one line.
    #[error("duplicate cart line for product {id}")]
    DuplicateLine { id: ProductId },
}

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;
