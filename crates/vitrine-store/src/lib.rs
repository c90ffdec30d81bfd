//! # vitrine-store: Session State Store for Vitrine
//!
//! Owns the shared cart state for one storefront session and tells observers
//! when it changes.
//!
//! ## Module Organization
//! ```text
//! vitrine_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── CartStore handle: mutations, reads, channels
//! ├── snapshot.rs     ◄─── CartSnapshot published to observers
//! └── session.rs      ◄─── Session lifecycle: init/teardown, current()
//! ```
//!
//! ## State Management
//! Two independent pieces of state, each owned exclusively by the store and
//! mutated only through its own operations:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CartStore (one per session)                       │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │  Cart contents               │  │  Panel visibility            │    │
//! │  │                              │  │                              │    │
//! │  │  Mutex<Cart>  (authoritative)│  │  watch::Sender<bool>         │    │
//! │  │  watch::Sender<CartSnapshot> │  │                              │    │
//! │  │  (republished per mutation)  │  │  (idempotent open/close)     │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  The UI layer holds no mutation rights: it reads, subscribes, and      │
//! │  invokes the exposed operations. Nothing else.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::ProductId;
//! use vitrine_store::CartStore;
//!
//! let store = CartStore::new();
//! let badge = store.clone(); // any component can hold a handle
//!
//! store.increase_cart_quantity(ProductId::new(5));
//! store.open_cart();
//!
//! assert_eq!(badge.cart_quantity(), 1);
//! assert!(badge.is_open());
//! ```

pub mod session;
pub mod snapshot;
pub mod store;

pub use session::{CartSession, SessionError};
pub use snapshot::CartSnapshot;
pub use store::CartStore;
