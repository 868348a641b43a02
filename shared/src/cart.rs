//! Cart state
//!
//! The externally-owned cart store: a map of cart key to entry plus a
//! total-changed observer. The storefront core never touches entries
//! directly; it goes through [`Cart::add`] and [`Cart::remove`] and reads
//! back quantities from the current snapshot.

use crate::models::Pricing;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Suffix marking a variant item with no chosen variant. Keys carrying it
/// never hold real quantity.
pub const UNSELECTED_SUFFIX: &str = "-unselected";

/// Composite cart key distinguishing entries for the same base item at
/// different variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CartKey(String);

impl CartKey {
    /// Derive the key for an item given its pricing shape and the current
    /// variant selection:
    /// - single pricing: the item id itself
    /// - variant pricing with a selection: `{id}-{variant}`
    /// - variant pricing without a selection: the `{id}-unselected` sentinel
    pub fn derive(item_id: &str, pricing: &Pricing, selected_variant: Option<&str>) -> Self {
        match pricing {
            Pricing::Single { .. } => Self(item_id.to_string()),
            Pricing::Variant { .. } => match selected_variant {
                Some(variant) => Self(format!("{item_id}-{variant}")),
                None => Self(format!("{item_id}{UNSELECTED_SUFFIX}")),
            },
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.0.ends_with(UNSELECTED_SUFFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved item snapshot captured at add time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItemSnapshot {
    pub item_id: String,
    pub name: String,
    /// Resolved price (the selected variant's rate, or the single price)
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_key: Option<String>,
    /// Human-readable variant label ("extra_spicy" rendered "Extra Spicy")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_label: Option<String>,
}

/// Cart entry: item snapshot plus a positive quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    pub item: CartItemSnapshot,
    pub quantity: u32,
}

/// Observer invoked with the new monetary total after every mutation
pub type TotalObserver = Box<dyn FnMut(Decimal) + Send>;

/// The cart store
#[derive(Default)]
pub struct Cart {
    entries: HashMap<CartKey, CartEntry>,
    on_total_change: Option<TotalObserver>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the quantity-change callback. It fires after every add or
    /// remove with the recomputed total.
    pub fn set_on_total_change(&mut self, observer: TotalObserver) {
        self.on_total_change = Some(observer);
    }

    /// Create the entry at `key` with quantity 1, or increment it by 1.
    ///
    /// Sentinel keys are rejected: a variant item with no chosen variant
    /// can never accumulate quantity. Returns whether the cart changed.
    pub fn add(&mut self, key: CartKey, snapshot: CartItemSnapshot) -> bool {
        if key.is_sentinel() {
            warn!(key = %key, "rejected add on sentinel cart key");
            return false;
        }

        let entry = self.entries.entry(key.clone()).or_insert(CartEntry {
            item: snapshot,
            quantity: 0,
        });
        entry.quantity += 1;
        debug!(key = %key, quantity = entry.quantity, "cart add");
        self.notify();
        true
    }

    /// Decrement the entry at `key`; the entry is dropped when quantity
    /// reaches zero. Missing keys are a no-op.
    pub fn remove(&mut self, key: &CartKey) -> bool {
        let Some(entry) = self.entries.get_mut(key) else {
            return false;
        };
        entry.quantity -= 1;
        let quantity = entry.quantity;
        if quantity == 0 {
            self.entries.remove(key);
        }
        debug!(key = %key, quantity, "cart remove");
        self.notify();
        true
    }

    pub fn quantity(&self, key: &CartKey) -> u32 {
        self.entries.get(key).map(|entry| entry.quantity).unwrap_or(0)
    }

    pub fn entry(&self, key: &CartKey) -> Option<&CartEntry> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&CartKey, &CartEntry)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Monetary total: Σ price × quantity over all entries
    pub fn total(&self) -> Decimal {
        self.entries
            .values()
            .map(|entry| entry.item.price * Decimal::from(entry.quantity))
            .sum()
    }

    fn notify(&mut self) {
        let total = self.total();
        if let Some(observer) = self.on_total_change.as_mut() {
            observer(total);
        }
    }
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart").field("entries", &self.entries).finish()
    }
}
