//! Catalog

pub mod errors;
pub mod models;
mod records;
pub mod service;

pub use errors::CatalogServiceError;
pub use models::{Product, ProductUuid};
pub use service::*;
