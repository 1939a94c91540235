use thiserror::Error;

use crate::{orders::OrdersServiceError, payments::PaymentsServiceError};

/// A checkout form rejected before any remote call is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing in the cart to order.
    #[error("the cart is empty")]
    EmptyCart,

    /// Customer name is blank.
    #[error("customer name is required")]
    MissingName,

    /// Customer email is blank.
    #[error("customer email is required")]
    MissingEmail,

    /// Customer phone is blank.
    #[error("customer phone is required")]
    MissingPhone,

    /// The selected terminal is not in the current terminal list.
    #[error("selected terminal {0} is not available")]
    UnknownTerminal(String),

    /// The selected pickup location does not match the store's location.
    #[error("selected pickup location {0} is not available")]
    UnknownPickupLocation(String),
}

/// Why a checkout submission did not reach the redirect.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The form or cart failed validation; nothing was sent anywhere.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The order record could not be created. The cart is left intact so
    /// the customer can retry.
    #[error("order creation failed")]
    OrderCreation(#[source] OrdersServiceError),

    /// The order record exists but the payment order could not be created.
    /// The cart is left intact; the pending record is reconciled later via
    /// its payment reference.
    #[error("payment initiation failed")]
    PaymentInitiation(#[source] PaymentsServiceError),
}
