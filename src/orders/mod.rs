//! Orders

pub mod errors;
pub mod models;
mod records;
pub mod service;

pub use errors::OrdersServiceError;
pub use models::{DeliveryDetails, NewOrder, Order, OrderLine, OrderUuid};
pub use service::*;
