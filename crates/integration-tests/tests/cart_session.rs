//! Full cart sessions over a file-backed store.

use boutique_cart::{CartController, FileStorage, NewLineItem};
use boutique_integration_tests::temp_cart;
use rust_decimal::Decimal;

fn shirt(size: &str, color: &str) -> NewLineItem {
    NewLineItem::new(
        "Shirt",
        "1000 DA",
        Some("img/shirt.jpg".to_owned()),
        Some(size.to_owned()),
        Some(color.to_owned()),
    )
}

#[test]
fn a_session_survives_a_reload() {
    let (dir, mut cart) = temp_cart();

    cart.add_item(shirt("M", "Red"));
    cart.add_item(shirt("M", "Red"));
    cart.add_item(NewLineItem::new("Jacket", "2500 DA", None, None, None));
    drop(cart);

    // A new controller over the same directory is "the next page load".
    let reloaded = CartController::new(FileStorage::new(dir.path()));
    assert_eq!(reloaded.items().len(), 2);

    let totals = reloaded.totals();
    assert_eq!(totals.total_items, 3);
    assert_eq!(totals.total_price.amount, Decimal::from(4500));

    // Insertion order is display order, also after the round trip.
    let names: Vec<&str> = reloaded.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Shirt", "Jacket"]);
}

#[test]
fn ids_stay_stable_across_reloads() {
    let (dir, mut cart) = temp_cart();
    let id = cart.add_item(shirt("L", "Blue"));
    drop(cart);

    let mut reloaded = CartController::new(FileStorage::new(dir.path()));
    assert!(reloaded.find(id).is_some());

    reloaded.set_quantity(id, 4);
    assert_eq!(reloaded.find(id).expect("line exists").quantity.get(), 4);
}

#[test]
fn quantity_edits_from_an_earlier_session_are_durable() {
    let (dir, mut cart) = temp_cart();
    let id = cart.add_item(shirt("M", "Red"));
    cart.set_quantity(id, 3);
    cart.decrement(id);
    drop(cart);

    let reloaded = CartController::new(FileStorage::new(dir.path()));
    assert_eq!(reloaded.find(id).expect("line exists").quantity.get(), 2);
}

#[test]
fn clearing_in_one_session_empties_the_next() {
    let (dir, mut cart) = temp_cart();
    cart.add_item(shirt("M", "Red"));
    cart.clear();
    drop(cart);

    let reloaded = CartController::new(FileStorage::new(dir.path()));
    assert!(reloaded.is_empty());
    assert_eq!(reloaded.totals().total_items, 0);
}

#[test]
fn merging_matches_across_sessions_too() {
    let (dir, mut cart) = temp_cart();
    cart.add_item(shirt("M", "Red"));
    drop(cart);

    let mut reloaded = CartController::new(FileStorage::new(dir.path()));
    reloaded.add_item(shirt("M", "Red"));

    assert_eq!(reloaded.items().len(), 1);
    assert_eq!(reloaded.totals().total_items, 2);
}
