//! Integration suite for the cart container's observable contract.
//!
//! Exercises the public facade end to end: add/increment/decrement
//! semantics, insertion order, the restart property through both storage
//! backends, decrement policies, the provider scope, and totals.

use std::sync::Arc;

use cartstore::{
    CartConfig, CartError, CartScope, CartService, CartStorage, FileStorage, LineItem,
    MemoryStorage, NewItem, QuantityPolicy,
};

fn item(id: &str, title: &str, price: f64) -> NewItem {
    NewItem {
        id: id.to_string(),
        title: title.to_string(),
        image_url: format!("https://example.com/{id}.png"),
        price,
    }
}

fn memory_cart() -> (Arc<MemoryStorage>, CartService) {
    let storage = Arc::new(MemoryStorage::new());
    let cart = CartService::new(storage.clone()).unwrap();
    (storage, cart)
}

#[test]
fn test_spec_scenario_end_to_end() {
    // The concrete walk-through: empty cart, two adds, one increment,
    // one decrement to zero under the default no-floor policy.
    let (_storage, cart) = memory_cart();

    cart.add_to_cart(item("p1", "Shirt", 10.0)).unwrap();
    assert_eq!(
        cart.list(),
        vec![LineItem {
            id: "p1".to_string(),
            title: "Shirt".to_string(),
            image_url: "https://example.com/p1.png".to_string(),
            price: 10.0,
            quantity: 1,
        }]
    );

    cart.add_to_cart(item("p2", "Hat", 5.0)).unwrap();
    let quantities: Vec<(String, i64)> = cart
        .list()
        .into_iter()
        .map(|p| (p.id, p.quantity))
        .collect();
    assert_eq!(
        quantities,
        vec![("p1".to_string(), 1), ("p2".to_string(), 1)]
    );

    cart.increment("p1").unwrap();
    cart.decrement("p2").unwrap();

    let quantities: Vec<(String, i64)> = cart
        .list()
        .into_iter()
        .map(|p| (p.id, p.quantity))
        .collect();
    assert_eq!(
        quantities,
        vec![("p1".to_string(), 2), ("p2".to_string(), 0)]
    );
}

#[test]
fn test_adding_same_id_twice_merges_with_latest_fields() {
    let (_storage, cart) = memory_cart();

    cart.add_to_cart(item("p1", "Shirt", 10.0)).unwrap();
    cart.add_to_cart(NewItem {
        id: "p1".to_string(),
        title: "Shirt (sale)".to_string(),
        image_url: "https://example.com/p1-sale.png".to_string(),
        price: 8.0,
    })
    .unwrap();

    let items = cart.list();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].title, "Shirt (sale)");
    assert_eq!(items[0].image_url, "https://example.com/p1-sale.png");
    assert_eq!(items[0].price, 8.0);
}

#[test]
fn test_increment_absent_id_changes_nothing() {
    let (_storage, cart) = memory_cart();
    cart.add_to_cart(item("p1", "Shirt", 10.0)).unwrap();
    cart.add_to_cart(item("p2", "Hat", 5.0)).unwrap();

    let before = cart.list();
    cart.increment("p9").unwrap();
    assert_eq!(cart.list(), before);
}

#[test]
fn test_restart_reconstructs_cart_from_memory_storage() {
    let (storage, cart) = memory_cart();
    cart.add_to_cart(item("p1", "Shirt", 10.0)).unwrap();
    cart.add_to_cart(item("p2", "Hat", 5.0)).unwrap();
    cart.increment("p1").unwrap();
    cart.decrement("p2").unwrap();

    let restored = CartService::new(storage).unwrap();
    assert_eq!(restored.list(), cart.list());
}

#[test]
fn test_restart_reconstructs_cart_from_file_storage() {
    let dir = tempfile::TempDir::new().unwrap();

    let expected = {
        let storage = Arc::new(FileStorage::new(dir.path()).unwrap());
        let cart = CartService::new(storage).unwrap();
        cart.add_to_cart(item("p1", "Shirt", 10.0)).unwrap();
        cart.add_to_cart(item("p2", "Hat", 5.0)).unwrap();
        cart.increment("p2").unwrap();
        cart.list()
    };

    // Everything from the first "session" is dropped; only the files
    // survive, as across a process restart.
    let storage = Arc::new(FileStorage::new(dir.path()).unwrap());
    let restored = CartService::new(storage).unwrap();
    assert_eq!(restored.list(), expected);
}

#[test]
fn test_accessor_without_provider_scope_fails() {
    let err = CartScope::current().unwrap_err();
    assert!(matches!(err, CartError::NotInProviderScope));
}

#[test]
fn test_handle_from_scope_shares_state_with_service() {
    let (_storage, cart) = memory_cart();
    let cart = Arc::new(cart);
    let _guard = CartScope::enter(cart.clone());

    let handle = CartScope::current().unwrap();
    handle.add_to_cart(item("p1", "Shirt", 10.0)).unwrap();
    handle.increment("p1").unwrap();

    assert_eq!(cart.list(), handle.products());
    assert_eq!(cart.list()[0].quantity, 2);
}

#[test]
fn test_remove_at_zero_policy_via_facade() {
    let storage = Arc::new(MemoryStorage::new());
    let cart = CartService::with_config(
        storage.clone(),
        CartConfig::with_policy(QuantityPolicy::RemoveAtZero),
    )
    .unwrap();

    cart.add_to_cart(item("p1", "Shirt", 10.0)).unwrap();
    cart.add_to_cart(item("p2", "Hat", 5.0)).unwrap();
    cart.decrement("p1").unwrap();

    let items = cart.list();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "p2");

    // The removal is persisted, not just in memory.
    let restored = CartService::with_config(
        storage,
        CartConfig::with_policy(QuantityPolicy::RemoveAtZero),
    )
    .unwrap();
    assert_eq!(restored.list(), items);
}

#[test]
fn test_clear_then_restart_yields_empty_cart() {
    let (storage, cart) = memory_cart();
    cart.add_to_cart(item("p1", "Shirt", 10.0)).unwrap();
    cart.clear().unwrap();

    let restored = CartService::new(storage).unwrap();
    assert!(restored.is_empty());
}

#[test]
fn test_summary_totals() {
    let (_storage, cart) = memory_cart();
    cart.add_to_cart(item("p1", "Shirt", 10.0)).unwrap();
    cart.increment("p1").unwrap();
    cart.add_to_cart(item("p2", "Hat", 5.0)).unwrap();

    let summary = cart.summary();
    assert_eq!(summary.total_price, 25.0);
    assert_eq!(summary.total_quantity, 3);
}

#[test]
fn test_persisted_blob_is_a_plain_item_array() {
    let (storage, cart) = memory_cart();
    cart.add_to_cart(item("p1", "Shirt", 10.0)).unwrap();

    let blob = storage.get("cart:items").unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], "p1");
    assert_eq!(arr[0]["quantity"], 1);
    assert_eq!(arr[0]["price"], 10.0);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize),
        Increment(usize),
        Decrement(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..5usize).prop_map(Op::Add),
            (0..5usize).prop_map(Op::Increment),
            (0..5usize).prop_map(Op::Decrement),
        ]
    }

    fn product_id(slot: usize) -> String {
        format!("p{slot}")
    }

    proptest! {
        /// Any operation sequence keeps ids unique, keeps insertion order,
        /// and matches a straightforward reference model.
        #[test]
        fn prop_cart_matches_reference_model(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let (_storage, cart) = memory_cart();
            let mut model: Vec<(String, i64)> = Vec::new();

            for op in &ops {
                match op {
                    Op::Add(slot) => {
                        let id = product_id(*slot);
                        cart.add_to_cart(item(&id, "Item", 1.0)).unwrap();
                        match model.iter_mut().find(|(mid, _)| *mid == id) {
                            Some((_, q)) => *q += 1,
                            None => model.push((id, 1)),
                        }
                    }
                    Op::Increment(slot) => {
                        let id = product_id(*slot);
                        cart.increment(&id).unwrap();
                        if let Some((_, q)) = model.iter_mut().find(|(mid, _)| *mid == id) {
                            *q += 1;
                        }
                    }
                    Op::Decrement(slot) => {
                        let id = product_id(*slot);
                        cart.decrement(&id).unwrap();
                        if let Some((_, q)) = model.iter_mut().find(|(mid, _)| *mid == id) {
                            *q -= 1;
                        }
                    }
                }
            }

            let observed: Vec<(String, i64)> = cart
                .list()
                .into_iter()
                .map(|p| (p.id, p.quantity))
                .collect();
            prop_assert_eq!(&observed, &model);

            // Uniqueness by id.
            let mut ids: Vec<&str> = observed.iter().map(|(id, _)| id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), observed.len());
        }

        /// After any operation sequence a restart over the same storage
        /// reconstructs the cart exactly.
        #[test]
        fn prop_restart_is_lossless(ops in prop::collection::vec(op_strategy(), 0..20)) {
            let (storage, cart) = memory_cart();
            for op in &ops {
                match op {
                    Op::Add(slot) => cart.add_to_cart(item(&product_id(*slot), "Item", 1.0)).unwrap(),
                    Op::Increment(slot) => cart.increment(&product_id(*slot)).unwrap(),
                    Op::Decrement(slot) => cart.decrement(&product_id(*slot)).unwrap(),
                }
            }

            let restored = CartService::new(storage).unwrap();
            prop_assert_eq!(restored.list(), cart.list());
        }
    }
}
