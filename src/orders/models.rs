//! Order Models

use jiff::Timestamp;

use crate::{
    catalog::models::ProductUuid,
    money::Amount,
    shipping::models::{PickupLocation, Terminal},
    uuids::TypedUuid,
};

/// Order UUID, assigned by the order store on insertion.
pub type OrderUuid = TypedUuid<Order>;

/// One cart line frozen into an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product: ProductUuid,
    pub name: String,
    pub unit_price: Amount,
    pub quantity: u32,
}

/// Where the order goes, resolved to a concrete address at validation time.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryDetails {
    /// Carrier shipment to a parcel terminal.
    Shipping { terminal: Terminal },
    /// In-store pickup at the retailer's fixed location.
    Pickup { location: PickupLocation },
}

/// The payload submitted at checkout. Constructed once per submission and
/// never mutated afterwards; a retry builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub lines: Vec<OrderLine>,
    pub subtotal: Amount,
    pub discount: Amount,
    pub total: Amount,
    pub applied_coupon: Option<String>,
    pub delivery: DeliveryDetails,
}

/// An order as recorded by the order store.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub status: String,
    pub total: Amount,
    pub created_at: Timestamp,
}
