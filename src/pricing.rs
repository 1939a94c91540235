//! Pricing

use crate::{cart::models::CartLine, coupons::models::Coupon, money::Amount};

/// Sum of unit price times quantity over all lines; 0 for an empty cart.
#[must_use]
pub fn subtotal(lines: &[CartLine]) -> Amount {
    lines.iter().fold(Amount::ZERO, |acc, line| {
        acc.saturating_add(line.line_total())
    })
}

/// Amount taken off the subtotal: `subtotal * percent / 100`, rounded
/// half-up to the nearest cent, or 0 without a coupon.
#[must_use]
pub fn discount_amount(subtotal: Amount, coupon: Option<&Coupon>) -> Amount {
    coupon.map_or(Amount::ZERO, |coupon| subtotal.percent_of(coupon.percent))
}

/// Grand total: `max(0, subtotal - discount)`. Never negative, even when
/// the discount exceeds the subtotal.
#[must_use]
pub fn grand_total(subtotal: Amount, discount: Amount) -> Amount {
    subtotal.saturating_sub(discount)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::catalog::models::ProductUuid;

    use super::*;

    fn line(cents: u64, quantity: u32) -> CartLine {
        CartLine {
            product: ProductUuid::new(),
            name: "Face Mist".to_string(),
            unit_price: Amount::from_minor(cents),
            image_url: String::new(),
            quantity,
        }
    }

    fn coupon(percent: i64) -> Coupon {
        Coupon {
            code: "SAVE".to_string(),
            percent: Decimal::from(percent),
        }
    }

    #[test]
    fn subtotal_of_empty_cart_is_zero() {
        assert_eq!(subtotal(&[]), Amount::ZERO);
    }

    #[test]
    fn subtotal_sums_line_totals() {
        let lines = [line(2000, 2), line(350, 3)];

        assert_eq!(subtotal(&lines), Amount::from_minor(5050));
    }

    #[test]
    fn no_coupon_means_no_discount() {
        assert_eq!(
            discount_amount(Amount::from_minor(5000), None),
            Amount::ZERO
        );
    }

    #[test]
    fn ten_percent_off_fifty_euros() {
        let subtotal = Amount::from_minor(5000);
        let discount = discount_amount(subtotal, Some(&coupon(10)));

        assert_eq!(discount, Amount::from_minor(500));
        assert_eq!(grand_total(subtotal, discount), Amount::from_minor(4500));
    }

    #[test]
    fn total_never_negative() {
        let total = grand_total(Amount::from_minor(100), Amount::from_minor(9900));

        assert_eq!(total, Amount::ZERO);
    }
}
