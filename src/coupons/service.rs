//! Coupons service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    config::BackendConfig,
    coupons::{errors::CouponsServiceError, models::Coupon},
};

/// Exact-match, active-only coupon lookup against the hosted backend.
///
/// Coupons are fetched fresh on each apply attempt; nothing is cached.
#[derive(Debug, Clone)]
pub struct RestCouponsService {
    config: BackendConfig,
    http: Client,
}

impl RestCouponsService {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl CouponsService for RestCouponsService {
    async fn find_coupon(&self, code: &str) -> Result<Coupon, CouponsServiceError> {
        let code = code.trim();

        if code.is_empty() {
            return Err(CouponsServiceError::EmptyCode);
        }

        let url = format!("{}/rest/v1/coupons", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .query(&[
                ("select", "code,discount_value"),
                ("code", &format!("eq.{code}")),
                ("is_active", "eq.true"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CouponsServiceError::Unavailable(format!(
                "coupon request failed with status {status}: {text}"
            )));
        }

        let records: Vec<CouponRecord> = response.json().await?;

        records
            .into_iter()
            .next()
            .map(Coupon::from)
            .ok_or(CouponsServiceError::InvalidCoupon)
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Look up an active coupon by exact code. Leading and trailing
    /// whitespace is trimmed before matching; an empty code never reaches
    /// the backend.
    async fn find_coupon(&self, code: &str) -> Result<Coupon, CouponsServiceError>;
}

#[derive(Debug, Deserialize)]
struct CouponRecord {
    code: String,
    discount_value: Decimal,
}

impl From<CouponRecord> for Coupon {
    fn from(record: CouponRecord) -> Self {
        Coupon {
            code: record.code,
            percent: record.discount_value,
        }
    }
}
