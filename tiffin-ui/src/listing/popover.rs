//! Variant selector popover
//!
//! One shared open/closed state for the whole listing; at most one item's
//! popover is open at a time. The click-outside listener is a scoped
//! acquisition: bound only while a popover is open, released on close and
//! on teardown, never a persistent global handler.

use super::session::ListingSession;
use shared::models::MenuItem;
use tracing::debug;

/// Releases the underlying platform listener when dropped
pub struct Subscription(Option<Box<dyn FnOnce()>>);

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(release)))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.0.take() {
            release();
        }
    }
}

/// Platform hook for the global pointer/click listener
pub trait OutsideClickBinding {
    /// Register the listener; the returned subscription unregisters it on
    /// drop.
    fn bind(&mut self) -> Subscription;
}

/// Popover state: closed, or open for exactly one item
#[derive(Default)]
pub struct VariantPopover {
    open_for: Option<String>,
    listener: Option<Subscription>,
}

impl VariantPopover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_for(&self) -> Option<&str> {
        self.open_for.as_deref()
    }

    pub fn is_open_for(&self, item_id: &str) -> bool {
        self.open_for.as_deref() == Some(item_id)
    }

    /// Click on an item's price control. Same item toggles closed; a
    /// different item switches directly with no observable closed state
    /// in between (the listener stays bound across the switch).
    pub fn toggle(&mut self, item_id: &str, binding: &mut dyn OutsideClickBinding) {
        match self.open_for.as_deref() {
            Some(open) if open == item_id => self.close(),
            Some(_) => {
                debug!(item = item_id, "popover switched");
                self.open_for = Some(item_id.to_string());
            }
            None => {
                debug!(item = item_id, "popover opened");
                self.open_for = Some(item_id.to_string());
                self.listener = Some(binding.bind());
            }
        }
    }

    /// Pick a variant option: apply the selection and close
    pub fn select(
        &mut self,
        session: &mut ListingSession,
        item: &MenuItem,
        variant_key: &str,
    ) -> bool {
        let applied = session.select_variant(item, variant_key);
        self.close();
        applied
    }

    /// Click landed outside every popover
    pub fn outside_click(&mut self) {
        if self.open_for.is_some() {
            self.close();
        }
    }

    fn close(&mut self) {
        debug!("popover closed");
        self.open_for = None;
        // dropping the subscription releases the platform listener
        self.listener = None;
    }
}
