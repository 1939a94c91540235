//! Coupons

pub mod entry;
pub mod errors;
pub mod models;
pub mod service;

pub use entry::CouponEntry;
pub use errors::CouponsServiceError;
pub use models::Coupon;
pub use service::*;
