//! Applied-coupon slot.

use crate::coupons::{errors::CouponsServiceError, models::Coupon, service::CouponsService};

/// The at-most-one applied coupon of a checkout form.
///
/// A successful apply replaces whatever was applied before; a failed apply
/// leaves the previous coupon untouched. Only [`CouponEntry::remove`] clears
/// the slot.
#[derive(Debug, Clone, Default)]
pub struct CouponEntry {
    applied: Option<Coupon>,
}

impl CouponEntry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn applied(&self) -> Option<&Coupon> {
        self.applied.as_ref()
    }

    /// Look up `code` and, on success, make it the applied coupon.
    ///
    /// # Errors
    ///
    /// Propagates the lookup error; the previously applied coupon (if any)
    /// is kept as-is in that case.
    pub async fn apply(
        &mut self,
        coupons: &dyn CouponsService,
        code: &str,
    ) -> Result<(), CouponsServiceError> {
        let coupon = coupons.find_coupon(code).await?;

        self.applied = Some(coupon);

        Ok(())
    }

    pub fn remove(&mut self) {
        self.applied = None;
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::coupons::service::MockCouponsService;

    use super::*;

    fn save10() -> Coupon {
        Coupon {
            code: "SAVE10".to_string(),
            percent: Decimal::from(10),
        }
    }

    #[tokio::test]
    async fn successful_apply_sets_the_coupon() {
        let mut coupons = MockCouponsService::new();
        coupons
            .expect_find_coupon()
            .returning(|_| Ok(save10()));

        let mut entry = CouponEntry::new();

        entry.apply(&coupons, "SAVE10").await.expect("apply");

        assert_eq!(entry.applied(), Some(&save10()));
    }

    #[tokio::test]
    async fn failed_apply_keeps_previous_coupon() {
        let mut coupons = MockCouponsService::new();
        coupons
            .expect_find_coupon()
            .withf(|code| code == "SAVE10")
            .returning(|_| Ok(save10()));
        coupons
            .expect_find_coupon()
            .withf(|code| code == "BOGUS")
            .returning(|_| Err(CouponsServiceError::InvalidCoupon));

        let mut entry = CouponEntry::new();
        entry.apply(&coupons, "SAVE10").await.expect("first apply");

        let result = entry.apply(&coupons, "BOGUS").await;

        assert!(matches!(result, Err(CouponsServiceError::InvalidCoupon)));
        assert_eq!(
            entry.applied(),
            Some(&save10()),
            "a failed apply must not clear the applied coupon"
        );
    }

    #[tokio::test]
    async fn new_apply_replaces_previous_coupon() {
        let spring = Coupon {
            code: "SPRING20".to_string(),
            percent: Decimal::from(20),
        };

        let mut coupons = MockCouponsService::new();
        coupons
            .expect_find_coupon()
            .withf(|code| code == "SAVE10")
            .returning(|_| Ok(save10()));
        {
            let spring = spring.clone();
            coupons
                .expect_find_coupon()
                .withf(|code| code == "SPRING20")
                .returning(move |_| Ok(spring.clone()));
        }

        let mut entry = CouponEntry::new();
        entry.apply(&coupons, "SAVE10").await.expect("first apply");
        entry.apply(&coupons, "SPRING20").await.expect("second apply");

        assert_eq!(entry.applied(), Some(&spring));
    }

    #[tokio::test]
    async fn remove_clears_the_slot() {
        let mut coupons = MockCouponsService::new();
        coupons
            .expect_find_coupon()
            .returning(|_| Ok(save10()));

        let mut entry = CouponEntry::new();
        entry.apply(&coupons, "SAVE10").await.expect("apply");

        entry.remove();

        assert_eq!(entry.applied(), None);
    }
}
