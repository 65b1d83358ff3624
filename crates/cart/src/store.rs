//! The cart store: authoritative item list, derived totals, persistence.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use boutique_core::{CurrencyCode, LineItemId, Price, Quantity, Variant};

use crate::item::{LineItem, NewLineItem};
use crate::storage::Storage;

/// The key the serialized cart is stored under.
pub const CART_KEY: &str = "cart";

/// Aggregate cart totals, recomputed from current contents on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub total_items: u64,
    /// Sum of all line totals (quantity × unit price).
    pub total_price: Price,
}

/// Persisted form of a cart line.
///
/// Field names and encoding match the legacy browser cart verbatim (`price`
/// is a JSON number, the formatted text travels as `priceFormatted`).
#[derive(Debug, Serialize, Deserialize)]
struct LineItemRecord {
    id: LineItemId,
    name: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    #[serde(rename = "priceFormatted")]
    price_formatted: String,
    image: String,
    size: String,
    color: String,
    quantity: u32,
}

impl From<&LineItem> for LineItemRecord {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.unit_price.amount,
            price_formatted: item.price_display.clone(),
            image: item.image.clone(),
            size: item.variant.size.clone(),
            color: item.variant.color.clone(),
            quantity: item.quantity.get(),
        }
    }
}

impl LineItemRecord {
    fn into_line_item(self, currency: CurrencyCode) -> LineItem {
        LineItem {
            id: self.id,
            name: self.name,
            unit_price: Price::new(self.price, currency),
            price_display: self.price_formatted,
            image: self.image,
            variant: Variant {
                size: self.size,
                color: self.color,
            },
            // Hand-edited or legacy state may carry a zero; clamp rather
            // than reject, the invariant holds either way.
            quantity: Quantity::clamped(i64::from(self.quantity)),
        }
    }
}

/// The authoritative in-memory cart.
///
/// Owns the ordered line item sequence; insertion order is display order
/// and survives persistence round-trips. Mutation goes through the
/// [`CartController`](crate::controller::CartController).
#[derive(Debug)]
pub struct CartStore {
    items: Vec<LineItem>,
    currency: CurrencyCode,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Load the cart persisted in `storage`.
    ///
    /// Absent or malformed state yields an empty cart, never an error:
    /// this is a convenience cache, and starting fresh beats refusing to
    /// start. Malformed payloads are logged and discarded.
    #[must_use]
    pub fn load(storage: &impl Storage, currency: CurrencyCode) -> Self {
        let Some(raw) = storage.read(CART_KEY) else {
            return Self::new(currency);
        };

        match serde_json::from_str::<Vec<LineItemRecord>>(&raw) {
            Ok(records) => {
                let items = records
                    .into_iter()
                    .map(|record| record.into_line_item(currency))
                    .collect();
                Self { items, currency }
            }
            Err(error) => {
                tracing::warn!(%error, "discarding malformed persisted cart");
                Self::new(currency)
            }
        }
    }

    /// Serialize the cart and write it to `storage`.
    ///
    /// Best-effort: a failed write is logged at `warn` and the in-memory
    /// state stays authoritative for the rest of the session.
    pub fn persist(&self, storage: &impl Storage) {
        let records: Vec<LineItemRecord> = self.items.iter().map(LineItemRecord::from).collect();
        match serde_json::to_string(&records) {
            Ok(serialized) => {
                if let Err(error) = storage.write(CART_KEY, &serialized) {
                    tracing::warn!(%error, "failed to persist cart");
                }
            }
            Err(error) => tracing::warn!(%error, "failed to serialize cart"),
        }
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The currency this cart prices in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Totals computed fresh from current contents; `(0, 0)` when empty.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let total_items = self
            .items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum();
        let total_price = self
            .items
            .iter()
            .map(|item| item.line_total().amount)
            .sum();
        CartTotals {
            total_items,
            total_price: Price::new(total_price, self.currency),
        }
    }

    /// Look up a line item by id.
    #[must_use]
    pub fn find(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: LineItemId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub(crate) fn find_match_mut(&mut self, candidate: &NewLineItem) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.matches(candidate))
    }

    pub(crate) fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove the line with `id`; returns whether anything was removed.
    pub(crate) fn remove(&mut self, id: LineItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub(crate) fn clear_items(&mut self) {
        self.items.clear();
    }
}
