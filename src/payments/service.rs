use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::config::PaymentConfig;

use super::errors::PaymentsServiceError;
use super::models::{PaymentOrder, PaymentOrderRequest};
use super::token::{
    CustomerClaims, PaymentClaims, PaymentMethodClaims, issuance_window, sign_claims,
    split_customer_name,
};

/// Payment provider client that exchanges a signed order payload for a
/// hosted payment page URL.
#[derive(Debug, Clone)]
pub struct RestPaymentsService {
    config: PaymentConfig,
    http: Client,
}

impl RestPaymentsService {
    #[must_use]
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn claims_for(&self, request: &PaymentOrderRequest, now: Timestamp) -> PaymentClaims {
        let (iat, exp) = issuance_window(now);
        let (first_name, last_name) = split_customer_name(&request.customer_name);
        let amount = request.amount.to_major();

        PaymentClaims {
            access_key: self.config.access_key.clone(),
            merchant_reference: request.merchant_reference.to_string(),
            grand_total: amount,
            currency: crate::money::CURRENCY.to_string(),
            locale: self.config.locale.clone(),
            return_url: self.config.return_url.clone(),
            notification_url: self.config.notification_url.clone(),
            customer: CustomerClaims {
                email: request.customer_email.clone(),
                first_name,
                last_name,
                phone: request.customer_phone.clone(),
            },
            payment: PaymentMethodClaims {
                method: "paymentInitiation",
                amount,
                currency: crate::money::CURRENCY.to_string(),
            },
            iat,
            exp,
        }
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Create a payment order with the provider and return the hosted
    /// payment page to redirect the customer to.
    async fn create_payment_order(
        &self,
        request: &PaymentOrderRequest,
    ) -> Result<PaymentOrder, PaymentsServiceError>;
}

#[async_trait]
impl PaymentsService for RestPaymentsService {
    async fn create_payment_order(
        &self,
        request: &PaymentOrderRequest,
    ) -> Result<PaymentOrder, PaymentsServiceError> {
        let claims = self.claims_for(request, Timestamp::now());
        let token = sign_claims(&self.config.secret_key, &claims)
            .map_err(PaymentsServiceError::Token)?;

        let response = self
            .http
            .post(format!("{}/orders", self.config.api_url))
            .json(&serde_json::json!({ "data": token }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(PaymentsServiceError::UnexpectedResponse(format!(
                "payment order creation failed with status {status}: {text}"
            )));
        }

        let body: PaymentOrderResponse = response.json().await?;
        let payment_url = body
            .payment_url
            .ok_or(PaymentsServiceError::MissingPaymentUrl)?;

        info!(
            merchant_reference = %request.merchant_reference,
            "payment order created"
        );

        Ok(PaymentOrder { payment_url })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentOrderResponse {
    payment_url: Option<String>,
}
