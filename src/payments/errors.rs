use thiserror::Error;

use super::token::PaymentTokenError;

#[derive(Debug, Error)]
pub enum PaymentsServiceError {
    /// The payment provider request failed at the transport level.
    #[error("payment provider request failed")]
    Http(#[from] reqwest::Error),

    /// The payment provider returned a non-success status or an
    /// unparseable body.
    #[error("payment provider returned an unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The payment order was accepted but no redirect URL came back.
    #[error("payment provider response is missing the payment url")]
    MissingPaymentUrl,

    /// The claims token could not be produced.
    #[error("payment token signing failed")]
    Token(#[source] PaymentTokenError),
}
