//! # Domain Types
//!
//! Core identifier types used throughout Vitrine.
//!
//! ## Why a Newtype?
//! Product identifiers are plain integers on the wire, but a dedicated type
//! keeps them from being mixed up with quantities or other counters in
//! function signatures. The wrapper serializes transparently, so the frontend
//! still sees a bare number.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Identifier of a product in the storefront catalog.
///
/// The catalog itself is outside this crate; the cart only ever references
/// products by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(u64);

impl ProductId {
    /// Creates a product id from its raw integer value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        ProductId(raw)
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(raw: u64) -> Self {
        ProductId(raw)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_roundtrip() {
        let id = ProductId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id, ProductId::from(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_product_id_serializes_transparently() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
