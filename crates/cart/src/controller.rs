//! The cart controller: the command surface a view layer dispatches into.

use boutique_core::{CurrencyCode, LineItemId, Quantity};

use crate::item::{LineItem, NewLineItem};
use crate::storage::Storage;
use crate::store::{CartStore, CartTotals};

/// Owns the cart store and its storage handle, and exposes the commands
/// (add, remove, set-quantity, clear) plus the query surface a renderer
/// reads.
///
/// Commands never fail: bad input degrades to safe defaults, unknown ids
/// are no-ops, and storage trouble is logged rather than propagated. Every
/// mutation persists the full cart before the command returns.
#[derive(Debug)]
pub struct CartController<S: Storage> {
    store: CartStore,
    storage: S,
}

impl<S: Storage> CartController<S> {
    /// Create a controller over `storage`, restoring any persisted cart.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_currency(storage, CurrencyCode::default())
    }

    /// Create a controller pricing in an explicit currency.
    #[must_use]
    pub fn with_currency(storage: S, currency: CurrencyCode) -> Self {
        let store = CartStore::load(&storage, currency);
        Self { store, storage }
    }

    /// Add a candidate to the cart.
    ///
    /// A candidate matching an existing line's merge key (name, size,
    /// color) increments that line by one; otherwise a fresh line with
    /// quantity 1 is appended at the end. Either way each call contributes
    /// exactly one unit. Returns the id of the affected line.
    pub fn add_item(&mut self, candidate: NewLineItem) -> LineItemId {
        let id = if let Some(existing) = self.store.find_match_mut(&candidate) {
            existing.quantity = existing.quantity.incremented();
            tracing::debug!(id = %existing.id, name = %existing.name, quantity = %existing.quantity, "merged into existing cart line");
            existing.id
        } else {
            let item = candidate.into_line_item(self.store.currency());
            let id = item.id;
            tracing::debug!(%id, name = %item.name, "added new cart line");
            self.store.push(item);
            id
        };
        self.store.persist(&self.storage);
        id
    }

    /// Remove the line with `id`; a no-op if no such line exists.
    pub fn remove_item(&mut self, id: LineItemId) {
        if self.store.remove(id) {
            tracing::debug!(%id, "removed cart line");
        } else {
            tracing::debug!(%id, "remove ignored, no such cart line");
        }
        self.store.persist(&self.storage);
    }

    /// Set the quantity of the line with `id`, clamped to at least 1.
    ///
    /// Dropping a line is an explicit [`remove_item`](Self::remove_item),
    /// never a zero quantity. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, id: LineItemId, quantity: i64) {
        if let Some(item) = self.store.find_mut(id) {
            item.quantity = Quantity::clamped(quantity);
            tracing::debug!(%id, quantity = %item.quantity, "set cart line quantity");
        } else {
            tracing::debug!(%id, "set-quantity ignored, no such cart line");
        }
        self.store.persist(&self.storage);
    }

    /// Raise the quantity of the line with `id` by one; no-op on unknown id.
    pub fn increment(&mut self, id: LineItemId) {
        if let Some(item) = self.store.find_mut(id) {
            item.quantity = item.quantity.incremented();
        }
        self.store.persist(&self.storage);
    }

    /// Lower the quantity of the line with `id` by one, stopping at 1;
    /// no-op on unknown id.
    pub fn decrement(&mut self, id: LineItemId) {
        if let Some(item) = self.store.find_mut(id) {
            item.quantity = item.quantity.decremented();
        }
        self.store.persist(&self.storage);
    }

    /// Empty the cart and persist the empty state.
    pub fn clear(&mut self) {
        self.store.clear_items();
        self.store.persist(&self.storage);
        tracing::debug!("cleared cart");
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.store.items()
    }

    /// Look up a line item by id.
    #[must_use]
    pub fn find(&self, id: LineItemId) -> Option<&LineItem> {
        self.store.find(id)
    }

    /// Totals recomputed from current contents.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.store.totals()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::storage::MemoryStorage;

    use super::*;

    fn shirt() -> NewLineItem {
        NewLineItem::new(
            "Shirt",
            "1000 DA",
            None,
            Some("M".to_owned()),
            Some("Red".to_owned()),
        )
    }

    fn controller() -> CartController<MemoryStorage> {
        CartController::new(MemoryStorage::new())
    }

    #[test]
    fn adding_the_same_selection_twice_merges_into_one_line() {
        let mut cart = controller();
        cart.add_item(shirt());
        cart.add_item(shirt());

        assert_eq!(cart.items().len(), 1);
        let totals = cart.totals();
        assert_eq!(totals.total_items, 2);
        assert_eq!(totals.total_price.amount, Decimal::from(2000));
    }

    #[test]
    fn repeated_adds_count_each_call_once() {
        let mut cart = controller();
        for _ in 0..5 {
            cart.add_item(shirt());
        }

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.totals().total_items, 5);
    }

    #[test]
    fn different_variants_stay_separate_lines() {
        let mut cart = controller();
        cart.add_item(shirt());
        cart.add_item(NewLineItem::new(
            "Shirt",
            "1000 DA",
            None,
            Some("L".to_owned()),
            Some("Red".to_owned()),
        ));

        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn insertion_order_is_display_order() {
        let mut cart = controller();
        cart.add_item(NewLineItem::new("Jacket", "2500 DA", None, None, None));
        cart.add_item(shirt());

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Jacket", "Shirt"]);
        assert_eq!(cart.totals().total_items, 2);
    }

    #[test]
    fn set_quantity_clamps_to_one() {
        let mut cart = controller();
        let id = cart.add_item(shirt());

        cart.set_quantity(id, 0);
        assert_eq!(cart.find(id).expect("item exists").quantity.get(), 1);

        cart.set_quantity(id, -4);
        assert_eq!(cart.find(id).expect("item exists").quantity.get(), 1);

        cart.set_quantity(id, 7);
        assert_eq!(cart.find(id).expect("item exists").quantity.get(), 7);
    }

    #[test]
    fn set_quantity_on_unknown_id_is_a_no_op() {
        let mut cart = controller();
        cart.add_item(shirt());
        let before: Vec<LineItem> = cart.items().to_vec();

        cart.set_quantity(LineItemId::generate(), 5);
        assert_eq!(cart.items(), before);
    }

    #[test]
    fn remove_on_unknown_id_is_a_no_op() {
        let mut cart = controller();
        cart.add_item(shirt());
        let before: Vec<LineItem> = cart.items().to_vec();

        cart.remove_item(LineItemId::generate());
        assert_eq!(cart.items(), before);
    }

    #[test]
    fn remove_drops_only_the_targeted_line() {
        let mut cart = controller();
        let shirt_id = cart.add_item(shirt());
        cart.add_item(NewLineItem::new("Jacket", "2500 DA", None, None, None));

        cart.remove_item(shirt_id);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(
            cart.items().first().map(|i| i.name.as_str()),
            Some("Jacket")
        );
    }

    #[test]
    fn decrement_never_goes_below_one() {
        let mut cart = controller();
        let id = cart.add_item(shirt());

        cart.decrement(id);
        assert_eq!(cart.find(id).expect("item exists").quantity.get(), 1);

        cart.increment(id);
        cart.increment(id);
        cart.decrement(id);
        assert_eq!(cart.find(id).expect("item exists").quantity.get(), 2);
    }

    #[test]
    fn increment_and_decrement_ignore_unknown_ids() {
        let mut cart = controller();
        cart.add_item(shirt());
        let before: Vec<LineItem> = cart.items().to_vec();

        cart.increment(LineItemId::generate());
        cart.decrement(LineItemId::generate());
        assert_eq!(cart.items(), before);
    }

    #[test]
    fn clear_empties_the_cart_and_resets_totals() {
        let mut cart = controller();
        cart.add_item(shirt());
        cart.clear();

        assert!(cart.is_empty());
        let totals = cart.totals();
        assert_eq!(totals.total_items, 0);
        assert_eq!(totals.total_price.amount, Decimal::ZERO);
    }

    #[test]
    fn clear_on_an_empty_cart_stays_empty() {
        let mut cart = controller();
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn unparsable_price_text_defaults_to_zero() {
        let mut cart = controller();
        cart.add_item(NewLineItem::new("Mystery", "price on request", None, None, None));

        assert_eq!(cart.totals().total_price.amount, Decimal::ZERO);
    }

    #[test]
    fn mutations_are_persisted_immediately() {
        let storage = MemoryStorage::new();
        {
            let mut cart = CartController::new(&storage);
            cart.add_item(shirt());
            cart.add_item(shirt());
        }

        // A fresh controller over the same storage sees the merged line.
        let reloaded = CartController::new(&storage);
        assert_eq!(reloaded.items().len(), 1);
        assert_eq!(reloaded.totals().total_items, 2);
    }
}
