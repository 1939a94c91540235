//! Configuration

use crate::{payments::PaymentSecretKey, shipping::models::PickupLocation};

/// Hosted backend (catalog, coupons, orders) connection settings.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// API key sent both as the `apikey` header and as the bearer token.
    pub api_key: String,
}

/// Payment provider connection settings.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Base URL of the provider API, without a trailing slash.
    pub api_url: String,
    /// Public access key, embedded in the signed claims.
    pub access_key: String,
    /// Signing key for payment-order claims.
    pub secret_key: PaymentSecretKey,
    /// Locale for the hosted payment page.
    pub locale: String,
    /// Where the provider sends the customer after payment.
    pub return_url: String,
    /// Where the provider posts payment status callbacks.
    pub notification_url: String,
}

/// Parcel terminal proxy settings.
#[derive(Debug, Clone)]
pub struct ShippingConfig {
    /// Full URL of the terminal-list proxy endpoint.
    pub proxy_url: String,
}

/// Everything the storefront needs to talk to the outside world.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: BackendConfig,
    pub payment: PaymentConfig,
    pub shipping: ShippingConfig,
    /// The in-store pickup point offered alongside terminal shipping.
    pub pickup: PickupLocation,
}
