//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;

use crate::{
    catalog::{
        errors::CatalogServiceError,
        models::{Product, ProductUuid},
        records::ProductRecord,
    },
    config::BackendConfig,
};

/// Read-only product catalog backed by the hosted data backend.
///
/// Every call re-fetches; the storefront keeps no product cache beyond the
/// lifetime of the page that requested the data.
#[derive(Debug, Clone)]
pub struct RestCatalogService {
    config: BackendConfig,
    http: Client,
}

impl RestCatalogService {
    /// Create a new service from the given backend configuration. Remote
    /// calls use reqwest's default timeouts.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn fetch_products(
        &self,
        filters: &[(&str, String)],
    ) -> Result<Vec<Product>, CatalogServiceError> {
        let url = format!("{}/rest/v1/products", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .query(&[("select", "*")])
            .query(filters)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CatalogServiceError::Unavailable(format!(
                "products request failed with status {status}: {text}"
            )));
        }

        let records: Vec<ProductRecord> = response.json().await?;

        Ok(records.into_iter().map(Product::from).collect())
    }
}

#[async_trait]
impl CatalogService for RestCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError> {
        self.fetch_products(&[]).await
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, CatalogServiceError> {
        let products = self
            .fetch_products(&[("id", format!("eq.{product}"))])
            .await?;

        products
            .into_iter()
            .next()
            .ok_or(CatalogServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError>;

    /// Retrieve a single product by id.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, CatalogServiceError>;
}
