//! Tiffin Client - HTTP client for the ordering backend
//!
//! Network calls for the storefront and the back-office: menu CRUD,
//! restaurant profile, and order lifecycle.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{ApiMessage, ItemPayload, MenuPayload, RestaurantPayload};
