//! Coupon Models

use rust_decimal::Decimal;

/// A discount coupon: case-sensitive code and a percentage in `0..=100`.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    pub code: String,
    pub percent: Decimal,
}
