//! Product Models

use crate::{money::Amount, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// A catalog entry as rendered by the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    /// `None` means the price has not been set yet and the product cannot
    /// be ordered.
    pub price: Option<Amount>,
    pub image_url: String,
    pub category: String,
    pub stock: u32,
    pub is_new: bool,
    pub is_top_seller: bool,
    pub has_discount: bool,
    pub old_price: Option<Amount>,
}

impl Product {
    /// A product can be added to the cart only when it has a price and
    /// stock remains.
    #[must_use]
    pub fn is_orderable(&self) -> bool {
        self.price.is_some() && self.stock > 0
    }
}
