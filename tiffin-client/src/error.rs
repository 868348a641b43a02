//! Error taxonomy for backend calls
//!
//! Transport failures come straight from reqwest; everything else is
//! derived from the backend's status code and `{"message"}` body, or from
//! a success body that does not decode to the expected shape.

use thiserror::Error;

/// Failure modes of a backend call
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never completed (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 2xx response whose body is not the expected JSON shape
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    /// 401: missing or expired token on a back-office endpoint
    #[error("Authentication required")]
    Unauthorized,

    /// 403: the token does not grant this operation
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404: unknown menu item, order, or route
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400: the backend rejected the payload
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Backend error: {0}")]
    Internal(String),
}

/// Result alias for backend calls
pub type ClientResult<T> = Result<T, ClientError>;
