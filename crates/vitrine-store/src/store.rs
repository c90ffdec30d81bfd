//! # Cart State Store
//!
//! Manages the shared cart state for one storefront session.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action               Store Operation            Published Effect    │
//! │  ─────────               ───────────────            ────────────────    │
//! │                                                                         │
//! │  Click "+" ────────────► increase_cart_quantity ──► fresh snapshot      │
//! │                                                                         │
//! │  Click "-" ────────────► decrease_cart_quantity ──► fresh snapshot      │
//! │                                                                         │
//! │  Click "Remove" ───────► remove_from_cart ────────► fresh snapshot      │
//! │                                                                         │
//! │  Click cart badge ─────► open_cart / close_cart ──► visibility flag     │
//! │                                                                         │
//! │  Read badge count ─────► cart_quantity ───────────► (read only)         │
//! │                                                                         │
//! │  NOTE: Each mutation locks the cart, derives the successor state with   │
//! │        a pure transition, swaps it in, and republishes a snapshot       │
//! │        before releasing the lock. Snapshots therefore appear in         │
//! │        mutation order. The visibility flag lives on its own channel     │
//! │        and is never touched by cart mutations.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::debug;

use vitrine_core::{Cart, CartItem, ProductId};

use crate::snapshot::CartSnapshot;

/// Shared handle to the cart state of one storefront session.
///
/// ## Handle Semantics
/// Cloning is cheap (one `Arc`); every clone addresses the same state, so a
/// handle can be passed to any component of a UI tree without threading it
/// through intermediate layers. All operations take `&self`.
///
/// ## Thread Safety
/// The authoritative cart sits behind a `Mutex`. Mutations are issued
/// strictly sequentially by the owning UI flow; the mutex merely makes the
/// handle `Send + Sync` so observers and the UI can live on different tasks.
#[derive(Debug, Clone)]
pub struct CartStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    /// Authoritative cart state.
    cart: Mutex<Cart>,

    /// Latest published snapshot; observers subscribe here.
    snapshot_tx: watch::Sender<CartSnapshot>,

    /// Cart panel visibility. Independent lifecycle from the cart contents.
    visibility_tx: watch::Sender<bool>,
}

impl CartStore {
    /// Creates a store with an empty cart and a closed panel.
    pub fn new() -> Self {
        let (snapshot_tx, _) = watch::channel(CartSnapshot::default());
        let (visibility_tx, _) = watch::channel(false);

        CartStore {
            inner: Arc::new(StoreInner {
                cart: Mutex::new(Cart::new()),
                snapshot_tx,
                visibility_tx,
            }),
        }
    }

    // =========================================================================
    // Cart Reads
    // =========================================================================

    /// Returns the quantity held for `id`, or 0 if the product is not in the
    /// cart. Pure read.
    pub fn get_item_quantity(&self, id: ProductId) -> u32 {
        self.lock_cart().item_quantity(id)
    }

    /// Returns the total quantity across all lines, recomputed on every read.
    pub fn cart_quantity(&self) -> u32 {
        self.lock_cart().total_quantity()
    }

    /// Returns the current cart lines in insertion order.
    pub fn cart_items(&self) -> Vec<CartItem> {
        self.lock_cart().lines().to_vec()
    }

    /// Returns the latest published snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        self.inner.snapshot_tx.borrow().clone()
    }

    // =========================================================================
    // Cart Mutations
    // =========================================================================

    /// Adds one unit of `id` to the cart.
    ///
    /// Inserts a `{id, quantity: 1}` line if the product is absent, otherwise
    /// increments the existing line.
    pub fn increase_cart_quantity(&self, id: ProductId) {
        debug!(product_id = %id, "increase cart quantity");
        self.publish(|cart| cart.with_increased(id));
    }

    /// Takes one unit of `id` out of the cart.
    ///
    /// A line at quantity 1 is removed entirely. Decreasing an id that is not
    /// in the cart is a no-op; the (unchanged) state is still republished,
    /// exactly like any other mutation.
    pub fn decrease_cart_quantity(&self, id: ProductId) {
        debug!(product_id = %id, "decrease cart quantity");
        self.publish(|cart| cart.with_decreased(id));
    }

    /// Removes the line for `id` regardless of quantity. No-op if absent.
    pub fn remove_from_cart(&self, id: ProductId) {
        debug!(product_id = %id, "remove from cart");
        self.publish(|cart| cart.without(id));
    }

    /// Empties the cart.
    pub fn clear_cart(&self) {
        debug!("clear cart");
        self.publish(|cart| cart.cleared());
    }

    // =========================================================================
    // Panel Visibility
    // =========================================================================

    /// Shows the cart panel. Idempotent: opening an open panel changes
    /// nothing and wakes no observers.
    pub fn open_cart(&self) {
        debug!("open cart panel");
        self.set_visibility(true);
    }

    /// Hides the cart panel. Idempotent, like [`CartStore::open_cart`].
    pub fn close_cart(&self) {
        debug!("close cart panel");
        self.set_visibility(false);
    }

    /// Returns whether the cart panel is currently shown.
    pub fn is_open(&self) -> bool {
        *self.inner.visibility_tx.borrow()
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Subscribes to cart snapshots.
    ///
    /// The receiver always exposes the latest snapshot; a slow observer skips
    /// intermediate states instead of lagging behind.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.inner.snapshot_tx.subscribe()
    }

    /// Subscribes to panel visibility changes.
    pub fn subscribe_visibility(&self) -> watch::Receiver<bool> {
        self.inner.visibility_tx.subscribe()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Applies a pure transition and republishes the snapshot.
    ///
    /// The lock is held across the publish so snapshots leave the store in
    /// the same order the mutations were applied.
    fn publish<F>(&self, transition: F)
    where
        F: FnOnce(&Cart) -> Cart,
    {
        let mut cart = self.lock_cart();
        *cart = transition(&cart);
        self.inner
            .snapshot_tx
            .send_replace(CartSnapshot::from(&*cart));
    }

    fn set_visibility(&self, open: bool) {
        self.inner.visibility_tx.send_if_modified(|current| {
            if *current == open {
                false
            } else {
                *current = open;
                true
            }
        });
    }

    fn lock_cart(&self) -> std::sync::MutexGuard<'_, Cart> {
        self.inner.cart.lock().expect("cart mutex poisoned")
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn test_store_starts_empty_and_closed() {
        let store = CartStore::new();
        assert_eq!(store.cart_quantity(), 0);
        assert!(store.cart_items().is_empty());
        assert!(!store.is_open());
        assert_eq!(store.snapshot(), CartSnapshot::default());
    }

    #[test]
    fn test_mutations_flow_through_handle_clones() {
        let store = CartStore::new();
        let clone = store.clone();

        clone.increase_cart_quantity(id(5));
        clone.increase_cart_quantity(id(5));

        assert_eq!(store.get_item_quantity(id(5)), 2);
        assert_eq!(store.cart_quantity(), 2);
    }

    #[test]
    fn test_snapshot_tracks_latest_state() {
        let store = CartStore::new();
        store.increase_cart_quantity(id(5));
        store.increase_cart_quantity(id(7));
        store.remove_from_cart(id(5));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.cart_quantity, 1);
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].id, id(7));
    }

    #[test]
    fn test_decrease_absent_republishes_unchanged_state() {
        let store = CartStore::new();
        store.increase_cart_quantity(id(5));

        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.decrease_cart_quantity(id(99));

        // The mutation went through the publish path...
        assert!(rx.has_changed().unwrap());
        // ...but the state it carries is unchanged.
        assert_eq!(rx.borrow_and_update().cart_quantity, 1);
        assert_eq!(store.get_item_quantity(id(5)), 1);
    }

    #[test]
    fn test_clear_cart_empties_everything() {
        let store = CartStore::new();
        store.increase_cart_quantity(id(1));
        store.increase_cart_quantity(id(2));

        store.clear_cart();

        assert!(store.cart_items().is_empty());
        assert_eq!(store.snapshot().cart_quantity, 0);
    }

    #[test]
    fn test_open_close_is_idempotent() {
        let store = CartStore::new();
        let mut rx = store.subscribe_visibility();

        store.open_cart();
        assert!(store.is_open());
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        // Second open: flag stays true, observer is not woken.
        store.open_cart();
        assert!(store.is_open());
        assert!(!rx.has_changed().unwrap());

        store.close_cart();
        store.close_cart();
        assert!(!store.is_open());
    }

    #[test]
    fn test_visibility_and_cart_channels_are_independent() {
        let store = CartStore::new();
        let mut cart_rx = store.subscribe();
        let mut vis_rx = store.subscribe_visibility();

        store.open_cart();
        assert!(!cart_rx.has_changed().unwrap());
        vis_rx.borrow_and_update();

        store.increase_cart_quantity(id(5));
        assert!(!vis_rx.has_changed().unwrap());
        assert!(cart_rx.has_changed().unwrap());

        // And the flag survives arbitrary cart churn.
        store.clear_cart();
        assert!(store.is_open());
    }
}
