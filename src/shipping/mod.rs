//! Shipping

pub mod errors;
pub mod models;
pub mod service;

pub use errors::TerminalsServiceError;
pub use models::{PickupLocation, Terminal, TerminalId};
pub use service::*;
