//! Product wire records for the hosted backend's REST surface.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    catalog::models::{Product, ProductUuid},
    money::Amount,
};

/// One row of the `products` table as returned by the backend.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductRecord {
    pub id: ProductUuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Option<Decimal>,
    #[serde(default)]
    pub imageurl: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default, rename = "isNew")]
    pub is_new: bool,
    #[serde(default, rename = "isTopSeller")]
    pub is_top_seller: bool,
    #[serde(default, rename = "hasDiscount")]
    pub has_discount: bool,
    #[serde(default, rename = "oldPrice")]
    pub old_price: Option<Decimal>,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product {
            uuid: record.id,
            name: record.name,
            description: record.description.unwrap_or_default(),
            // A missing or malformed price means the product is not
            // orderable, same as an explicit null.
            price: record.price.and_then(Amount::from_major),
            image_url: record.imageurl.unwrap_or_default(),
            category: record.category.unwrap_or_default(),
            stock: record.stock,
            is_new: record.is_new,
            is_top_seller: record.is_top_seller,
            has_discount: record.has_discount,
            old_price: record.old_price.and_then(Amount::from_major),
        }
    }
}
