//! Shared types for the Tiffin ordering platform
//!
//! Data models, cart state, and response envelopes used by both the
//! storefront core and the backend HTTP client.

pub mod cart;
pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{Cart, CartEntry, CartItemSnapshot, CartKey};
