//! Catalog service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// No product with the requested id exists.
    #[error("product not found")]
    NotFound,

    /// The backend answered with a non-success status.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
