//! Orders service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// No order matches the requested payment reference.
    #[error("order not found")]
    NotFound,

    /// The order store answered with a non-success status.
    #[error("order store unavailable: {0}")]
    Unavailable(String),

    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
