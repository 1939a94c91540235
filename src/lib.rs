//! Vitrine
//!
//! Vitrine is the storefront core of a small cosmetics retailer: a session cart, pure pricing rules, REST clients for the hosted catalog, coupon and order backend, and a checkout orchestrator that records the order and hands the customer off to the payment provider.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod context;
pub mod coupons;
pub mod money;
pub mod orders;
pub mod payments;
pub mod pricing;
pub mod shipping;
mod uuids;

pub use uuids::TypedUuid;
