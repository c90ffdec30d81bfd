//! # vitrine-core: Pure Cart Logic for Vitrine
//!
//! This crate is the **heart** of Vitrine. It contains the cart transition
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrine Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI Tree                           │   │
//! │  │    Product Grid ──► Cart Badge ──► Cart Panel                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartStore handle                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vitrine-store                                │   │
//! │  │    shared handle, snapshot channel, panel visibility            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrine-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   cart    │  │ validation│                  │   │
//! │  │   │ ProductId │  │   Cart    │  │   rules   │                  │   │
//! │  │   │           │  │ CartItem  │  │  checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Identifier types ([`ProductId`])
//! - [`cart`] - The cart and its transitions ([`Cart`], [`CartItem`])
//! - [`error`] - Invariant-violation errors
//! - [`validation`] - Line-list validation for data crossing into the crate
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every transition is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, shared state access is FORBIDDEN here
//! 3. **Replace, Don't Mutate**: Transitions return the successor cart;
//!    callers decide when it becomes current
//! 4. **Explicit Errors**: The one fallible boundary is typed, never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::{Cart, ProductId};
//!
//! let coffee = ProductId::new(5);
//!
//! // Start empty, add two units, take one back
//! let cart = Cart::new()
//!     .with_increased(coffee)
//!     .with_increased(coffee)
//!     .with_decreased(coffee);
//!
//! assert_eq!(cart.item_quantity(coffee), 1);
//! assert_eq!(cart.total_quantity(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrine_core::Cart` instead of
// `use vitrine_core::cart::Cart`

pub use cart::{Cart, CartItem};
pub use error::{CartError, CartResult};
pub use types::ProductId;
