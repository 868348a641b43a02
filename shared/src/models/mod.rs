//! Data models
//!
//! Shared between the storefront core and the backend API (via JSON).
//! Wire format is the backend's camelCase JSON; all IDs are opaque strings.

pub mod menu_item;
pub mod order;
pub mod restaurant;

// Re-exports
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
