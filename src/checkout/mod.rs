//! Checkout

pub mod errors;
pub mod form;
pub mod service;

pub use errors::{CheckoutError, ValidationError};
pub use form::{CheckoutForm, DeliverySelection};
pub use service::{
    CheckoutObserver, CheckoutPhase, CheckoutRedirect, CheckoutService, NoopObserver,
};
