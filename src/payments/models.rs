//! Payment Models

use crate::{money::Amount, orders::models::OrderUuid};

/// Request for a hosted-payment redirect, keyed by the order it pays for.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOrderRequest {
    /// The order UUID, used as the merchant reference.
    pub merchant_reference: OrderUuid,
    pub amount: Amount,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

/// A created payment order: where to send the customer next.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOrder {
    pub payment_url: String,
}
