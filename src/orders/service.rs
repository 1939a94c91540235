//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use tracing::info;

use crate::{
    config::BackendConfig,
    orders::{
        errors::OrdersServiceError,
        models::{NewOrder, Order},
        records::{InsertOrderRecord, OrderRecord},
    },
};

/// Order store client. The hosted backend is the system of record and
/// assigns the order id on insertion.
#[derive(Debug, Clone)]
pub struct RestOrdersService {
    config: BackendConfig,
    http: Client,
}

impl RestOrdersService {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl OrdersService for RestOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let url = format!("{}/rest/v1/orders", self.config.base_url);
        let record = InsertOrderRecord::from(order);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(OrdersServiceError::Unavailable(format!(
                "order insert failed with status {status}: {text}"
            )));
        }

        let created: Vec<OrderRecord> = response.json().await?;

        let order = created
            .into_iter()
            .next()
            .map(Order::from)
            .ok_or_else(|| {
                OrdersServiceError::Unavailable(
                    "order insert returned no representation".to_string(),
                )
            })?;

        info!(order_uuid = %order.uuid, "created order record");

        Ok(order)
    }

    async fn find_by_payment_reference(
        &self,
        reference: &str,
    ) -> Result<Order, OrdersServiceError> {
        let url = format!("{}/rest/v1/orders", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .query(&[
                ("select", "id,status,total_price,created_at"),
                ("payment_reference", &format!("eq.{reference}")),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(OrdersServiceError::Unavailable(format!(
                "order lookup failed with status {status}: {text}"
            )));
        }

        let records: Vec<OrderRecord> = response.json().await?;

        records
            .into_iter()
            .next()
            .map(Order::from)
            .ok_or(OrdersServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Insert a new order record; the backend assigns the order UUID and
    /// the record starts out in `pending` status.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Look up an order by the payment reference attached after checkout,
    /// for the confirmation page.
    async fn find_by_payment_reference(
        &self,
        reference: &str,
    ) -> Result<Order, OrdersServiceError>;
}
