//! Coupons service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CouponsServiceError {
    /// The entered code was empty or whitespace-only; rejected before any
    /// remote call.
    #[error("coupon code is empty")]
    EmptyCode,

    /// No active coupon matches the code exactly.
    #[error("invalid coupon code")]
    InvalidCoupon,

    /// The backend answered with a non-success status.
    #[error("coupon lookup unavailable: {0}")]
    Unavailable(String),

    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
