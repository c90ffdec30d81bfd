//! Contract tests for the cart store, driven purely through the public
//! handle: the scenarios a storefront UI actually produces, plus the
//! subscription behavior observers rely on.

use vitrine_core::{CartItem, ProductId};
use vitrine_store::{CartSnapshot, CartStore};

fn id(raw: u64) -> ProductId {
    ProductId::new(raw)
}

// =============================================================================
// Scenario Table
// =============================================================================

#[test]
fn increase_on_empty_cart_creates_single_line() {
    let store = CartStore::new();

    store.increase_cart_quantity(id(5));

    assert_eq!(store.cart_items(), vec![CartItem::new(id(5), 1)]);
    assert_eq!(store.cart_quantity(), 1);
}

#[test]
fn increase_on_existing_line_increments() {
    let store = CartStore::new();
    store.increase_cart_quantity(id(5));

    store.increase_cart_quantity(id(5));

    assert_eq!(store.cart_items(), vec![CartItem::new(id(5), 2)]);
    assert_eq!(store.cart_quantity(), 2);
}

#[test]
fn decrease_at_quantity_one_removes_line() {
    let store = CartStore::new();
    store.increase_cart_quantity(id(5));

    store.decrease_cart_quantity(id(5));

    assert!(store.cart_items().is_empty());
    assert_eq!(store.cart_quantity(), 0);
}

#[test]
fn remove_leaves_other_lines_untouched() {
    let store = CartStore::new();
    store.increase_cart_quantity(id(5));
    store.increase_cart_quantity(id(5));
    store.increase_cart_quantity(id(7));

    store.remove_from_cart(id(5));

    assert_eq!(store.cart_items(), vec![CartItem::new(id(7), 1)]);
}

#[test]
fn absent_id_reads_zero() {
    let store = CartStore::new();
    assert_eq!(store.get_item_quantity(id(99)), 0);
}

#[test]
fn quantity_equals_number_of_increase_calls() {
    let store = CartStore::new();
    for _ in 0..12 {
        store.increase_cart_quantity(id(3));
    }
    assert_eq!(store.get_item_quantity(id(3)), 12);

    store.decrease_cart_quantity(id(3));
    assert_eq!(store.get_item_quantity(id(3)), 11);
}

#[test]
fn cart_quantity_is_the_line_sum() {
    let store = CartStore::new();
    store.increase_cart_quantity(id(1));
    store.increase_cart_quantity(id(2));
    store.increase_cart_quantity(id(2));
    store.increase_cart_quantity(id(3));

    let expected: u32 = store.cart_items().iter().map(|line| line.quantity).sum();
    assert_eq!(store.cart_quantity(), expected);
    assert_eq!(store.cart_quantity(), 4);
}

// =============================================================================
// Subscription Behavior
// =============================================================================

#[tokio::test]
async fn each_mutation_republishes_a_snapshot() {
    let store = CartStore::new();
    let mut rx = store.subscribe();

    store.increase_cart_quantity(id(5));
    rx.changed().await.unwrap();
    assert_eq!(
        *rx.borrow_and_update(),
        CartSnapshot {
            items: vec![CartItem::new(id(5), 1)],
            cart_quantity: 1,
        }
    );

    store.increase_cart_quantity(id(5));
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().cart_quantity, 2);

    store.remove_from_cart(id(5));
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), CartSnapshot::default());
}

#[tokio::test]
async fn late_subscriber_sees_only_the_latest_state() {
    let store = CartStore::new();

    // A burst of mutations before anyone subscribes.
    for _ in 0..5 {
        store.increase_cart_quantity(id(9));
    }

    // The new receiver starts from the current state with nothing pending.
    let mut rx = store.subscribe();
    assert!(!rx.has_changed().unwrap());
    assert_eq!(rx.borrow().cart_quantity, 5);

    store.decrease_cart_quantity(id(9));
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().cart_quantity, 4);
}

#[tokio::test]
async fn visibility_subscription_follows_open_close() {
    let store = CartStore::new();
    let mut rx = store.subscribe_visibility();

    store.open_cart();
    rx.changed().await.unwrap();
    assert!(*rx.borrow_and_update());

    store.close_cart();
    rx.changed().await.unwrap();
    assert!(!*rx.borrow_and_update());
}

#[test]
fn panel_flag_never_rides_the_snapshot_channel() {
    let store = CartStore::new();
    let mut cart_rx = store.subscribe();
    let mut vis_rx = store.subscribe_visibility();

    store.open_cart();
    store.close_cart();
    store.open_cart();

    assert!(!cart_rx.has_changed().unwrap());
    assert!(vis_rx.has_changed().unwrap());

    vis_rx.borrow_and_update();
    store.increase_cart_quantity(id(5));
    store.clear_cart();

    assert!(!vis_rx.has_changed().unwrap());
    assert!(cart_rx.has_changed().unwrap());
}
