//! Cart Models

use crate::{
    cart::errors::CartError,
    catalog::models::{Product, ProductUuid},
    money::Amount,
};

/// One product's presence in the cart.
///
/// Name, price, and image are a display snapshot copied when the product is
/// added; a later catalog price change never alters an already-added line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: ProductUuid,
    pub name: String,
    pub unit_price: Amount,
    pub image_url: String,
    /// Always at least 1; a line that would drop to 0 must be removed
    /// instead.
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a catalog product into a cart line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotOrderable`] when the product has no price and
    /// [`CartError::ZeroQuantity`] when `quantity` is 0. Stock limits are the
    /// caller's concern, checked against catalog data before calling this.
    pub fn from_product(product: &Product, quantity: u32) -> Result<Self, CartError> {
        let unit_price = product.price.ok_or(CartError::NotOrderable)?;

        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        Ok(CartLine {
            product: product.uuid,
            name: product.name.clone(),
            unit_price,
            image_url: product.image_url.clone(),
            quantity,
        })
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Amount {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// A consistent copy of the cart state handed to subscribers and readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub is_open: bool,
}
