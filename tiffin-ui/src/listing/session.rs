//! Listing session - per-item derived state
//!
//! Owns the transient selected-variant map and derives each on-screen
//! row from the current menu and cart snapshots. Lives as long as the
//! storefront view; never torn down explicitly.

use rust_decimal::Decimal;
use shared::cart::{Cart, CartItemSnapshot, CartKey};
use shared::models::{MenuItem, Pricing};
use shared::util::format_variant_label;
use std::collections::HashMap;
use tracing::debug;

/// Derived state for one menu item row
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub cart_key: CartKey,
    pub selected_variant: Option<String>,
    /// Resolved price, `None` when no valid price source exists
    pub display_price: Option<Decimal>,
    pub can_add: bool,
    pub quantity: u32,
    pub unavailable: bool,
}

/// Listing session state
#[derive(Debug, Default)]
pub struct ListingSession {
    /// item id -> chosen variant key; populated lazily, entries are never
    /// dropped and only overwritten by explicit user action
    selected_variants: HashMap<String, String>,
}

impl ListingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default-variant pass, run whenever a new menu snapshot is observed.
    ///
    /// For every variant item with at least one declared rate and no prior
    /// selection, the first declared key becomes the selection. Existing
    /// selections are left untouched, so unrelated menu refreshes never
    /// clobber a user's choice. Returns whether any default was written,
    /// letting callers skip redundant re-renders.
    pub fn observe_menu(&mut self, menu: &[MenuItem]) -> bool {
        let mut changed = false;

        for item in menu {
            let Some(rates) = item.pricing.rates() else {
                continue;
            };
            if self.selected_variants.contains_key(&item.id) {
                continue;
            }
            if let Some((first_key, _)) = rates.first() {
                debug!(item = %item.id, variant = first_key, "default variant selected");
                self.selected_variants
                    .insert(item.id.clone(), first_key.to_string());
                changed = true;
            }
        }

        changed
    }

    /// Explicit variant selection (popover pick). Overwrites any prior
    /// selection; keys the item does not declare are rejected.
    pub fn select_variant(&mut self, item: &MenuItem, key: &str) -> bool {
        let valid = item
            .pricing
            .rates()
            .map(|rates| rates.contains_key(key))
            .unwrap_or(false);
        if !valid {
            return false;
        }
        self.selected_variants.insert(item.id.clone(), key.to_string());
        true
    }

    /// Current selection for an item, if any
    pub fn selected_variant(&self, item_id: &str) -> Option<&str> {
        self.selected_variants.get(item_id).map(String::as_str)
    }

    /// Derive the row state for one item against the current cart snapshot.
    ///
    /// Addability always fails when no valid price resolves; there is no
    /// numeric fallback from a variant item to a stray `price` field.
    pub fn row(&self, item: &MenuItem, cart: &Cart) -> ItemRow {
        let selected = match &item.pricing {
            Pricing::Variant { .. } => self.selected_variant(&item.id),
            Pricing::Single { .. } => None,
        };

        let display_price = match &item.pricing {
            Pricing::Single { price } => *price,
            Pricing::Variant { rates } => selected.and_then(|key| rates.get(key)),
        };

        let cart_key = CartKey::derive(&item.id, &item.pricing, selected);

        // A stray entry under the sentinel key must never surface as a
        // visible quantity.
        let quantity = if item.pricing.is_variant() && selected.is_none() {
            0
        } else {
            cart.quantity(&cart_key)
        };

        let unavailable = !item.available;
        let can_add = !unavailable && display_price.is_some();

        ItemRow {
            cart_key,
            selected_variant: selected.map(str::to_string),
            display_price,
            can_add,
            quantity,
            unavailable,
        }
    }

    /// Add one unit of the item at its current selection. Guarded no-op
    /// when the row is not addable.
    pub fn add_to_cart(&self, item: &MenuItem, cart: &mut Cart) -> bool {
        let row = self.row(item, cart);
        let Some(price) = row.display_price.filter(|_| row.can_add) else {
            debug!(item = %item.id, "add ignored: row not addable");
            return false;
        };

        let snapshot = CartItemSnapshot {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price,
            variant_key: row.selected_variant.clone(),
            variant_label: row
                .selected_variant
                .as_deref()
                .map(format_variant_label),
        };
        cart.add(row.cart_key, snapshot)
    }

    /// Remove one unit of the item at its current selection
    pub fn remove_from_cart(&self, item: &MenuItem, cart: &mut Cart) -> bool {
        if !item.available {
            return false;
        }
        let row = self.row(item, cart);
        cart.remove(&row.cart_key)
    }
}
