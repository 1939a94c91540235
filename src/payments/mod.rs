//! Payments

pub mod errors;
pub mod models;
pub mod service;
pub mod token;

pub use errors::PaymentsServiceError;
pub use models::{PaymentOrder, PaymentOrderRequest};
pub use service::*;
pub use token::{PaymentSecretKey, PaymentTokenError};
