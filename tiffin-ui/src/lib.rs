//! Tiffin UI core - headless state for the storefront and back-office
//!
//! Everything here is derived state and synchronous transitions: grouping,
//! variant selection, cart-key derivation, form validation, list filtering.
//! No rendering, no I/O. The only shared mutable resource is the cart
//! store, reached through its add/remove contract.

pub mod admin;
pub mod filter;
pub mod listing;

pub use filter::{MenuFilters, StorefrontGate};
pub use listing::{DescriptionModal, ItemRow, ListingSession, VariantPopover};
