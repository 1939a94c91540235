//! Terminals service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalsServiceError {
    /// The shipping-partner proxy answered with a non-success status.
    #[error("terminal directory unavailable: {0}")]
    Unavailable(String),

    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
