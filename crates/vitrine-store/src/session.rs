//! # Session Lifecycle
//!
//! Scopes one [`CartStore`] to the lifetime of a UI session.
//!
//! ## Why a Session Slot?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Handle Distribution                                  │
//! │                                                                         │
//! │  Option A: pass a CartStore clone down the tree                        │
//! │  └── explicit, but threads the handle through every layer              │
//! │                                                                         │
//! │  Option B: session slot (THIS MODULE)                                  │
//! │  ├── CartSession::start() installs a fresh store                       │
//! │  ├── session::current() hands it out anywhere in the tree              │
//! │  └── dropping the guard tears the state down                           │
//! │                                                                         │
//! │  Both are supported; the slot exists so deeply nested components can   │
//! │  reach the cart without prop threading.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The slot is not bare global mutable state: it can only be populated by
//! [`CartSession::start`] and is emptied again when the returned guard drops,
//! so the store's lifetime is tied to the session that owns it.

use std::sync::RwLock;

use thiserror::Error;
use tracing::{debug, info};

use crate::store::CartStore;

/// The one store slot for this process. Guarded by the session lifecycle.
static SESSION: RwLock<Option<CartStore>> = RwLock::new(None);

/// Session lifecycle errors.
///
/// These are the only failure paths in the store layer; the cart operations
/// themselves are total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// `start` was called while a session guard is still alive.
    #[error("a cart session is already active")]
    AlreadyActive,

    /// `current` was called outside a session.
    #[error("no cart session is active")]
    NotActive,
}

/// RAII guard for one UI session's cart state.
///
/// Created by [`CartSession::start`]; dropping it discards the cart and the
/// panel flag. Hold it for exactly as long as the UI session lives.
#[derive(Debug)]
pub struct CartSession {
    store: CartStore,
}

impl CartSession {
    /// Starts a session with an empty cart and installs its store in the
    /// session slot.
    ///
    /// ## Errors
    /// [`SessionError::AlreadyActive`] if a previous guard has not been
    /// dropped yet.
    pub fn start() -> Result<CartSession, SessionError> {
        let mut slot = SESSION.write().expect("session slot poisoned");
        if slot.is_some() {
            return Err(SessionError::AlreadyActive);
        }

        let store = CartStore::new();
        *slot = Some(store.clone());
        info!("cart session started");

        Ok(CartSession { store })
    }

    /// Returns a handle to this session's store.
    pub fn store(&self) -> CartStore {
        self.store.clone()
    }
}

impl Drop for CartSession {
    fn drop(&mut self) {
        // Never panic in drop; a poisoned slot is emptied on a best-effort
        // basis during unwinding.
        if let Ok(mut slot) = SESSION.write() {
            slot.take();
        }
        debug!("cart session torn down");
    }
}

/// Returns the active session's store from anywhere in the tree.
///
/// ## Errors
/// [`SessionError::NotActive`] outside a session.
pub fn current() -> Result<CartStore, SessionError> {
    SESSION
        .read()
        .expect("session slot poisoned")
        .clone()
        .ok_or(SessionError::NotActive)
}
