//! Cart errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The product has no price set and cannot be ordered.
    #[error("product is not orderable")]
    NotOrderable,

    /// Cart lines always carry a quantity of at least 1; removal is an
    /// explicit operation, never a side effect of a zero quantity.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// No line for the given product exists in the cart.
    #[error("cart line not found")]
    LineNotFound,
}
