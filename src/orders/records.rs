//! Order wire records for the hosted backend's REST surface.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::models::ProductUuid,
    money::Amount,
    orders::models::{DeliveryDetails, NewOrder, Order, OrderLine, OrderUuid},
};

/// Insert payload for the `orders` table. New orders always start out
/// `pending`; payment confirmation happens out-of-band.
#[derive(Debug, Serialize)]
pub(crate) struct InsertOrderRecord {
    customer_name: String,
    customer_email: String,
    phone: String,
    products: Vec<OrderLineRecord>,
    subtotal: Decimal,
    discount: Decimal,
    total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    applied_coupon: Option<String>,
    status: &'static str,
    delivery_method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    terminal_id: Option<String>,
    terminal_address: AddressRecord,
}

#[derive(Debug, Serialize)]
struct OrderLineRecord {
    id: ProductUuid,
    name: String,
    price: Decimal,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct AddressRecord {
    name: String,
    city: String,
    address: String,
    postal_code: String,
}

impl From<NewOrder> for InsertOrderRecord {
    fn from(order: NewOrder) -> Self {
        let (delivery_method, terminal_id, terminal_address) = match order.delivery {
            DeliveryDetails::Shipping { terminal } => (
                "shipping",
                Some(terminal.id.to_string()),
                AddressRecord {
                    name: terminal.name,
                    city: terminal.city,
                    address: terminal.address,
                    postal_code: terminal.postal_code,
                },
            ),
            DeliveryDetails::Pickup { location } => (
                "pickup",
                None,
                AddressRecord {
                    name: location.name,
                    city: location.city,
                    address: location.address,
                    postal_code: location.postal_code,
                },
            ),
        };

        InsertOrderRecord {
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            phone: order.customer_phone,
            products: order.lines.into_iter().map(OrderLineRecord::from).collect(),
            subtotal: order.subtotal.to_major(),
            discount: order.discount.to_major(),
            total_price: order.total.to_major(),
            applied_coupon: order.applied_coupon,
            status: "pending",
            delivery_method,
            terminal_id,
            terminal_address,
        }
    }
}

impl From<OrderLine> for OrderLineRecord {
    fn from(line: OrderLine) -> Self {
        OrderLineRecord {
            id: line.product,
            name: line.name,
            price: line.unit_price.to_major(),
            quantity: line.quantity,
        }
    }
}

/// One row of the `orders` table as returned by the backend.
#[derive(Debug, Deserialize)]
pub(crate) struct OrderRecord {
    pub id: OrderUuid,
    pub status: String,
    pub total_price: Decimal,
    pub created_at: Timestamp,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Order {
            uuid: record.id,
            status: record.status,
            total: Amount::from_major(record.total_price).unwrap_or(Amount::ZERO),
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::shipping::models::{PickupLocation, Terminal, TerminalId};

    use super::*;

    fn new_order(delivery: DeliveryDetails) -> NewOrder {
        NewOrder {
            customer_name: "Ona Jonaitytė".to_string(),
            customer_email: "ona@example.com".to_string(),
            customer_phone: "+37060000000".to_string(),
            lines: vec![OrderLine {
                product: ProductUuid::new(),
                name: "Rose Serum".to_string(),
                unit_price: Amount::from_minor(2000),
                quantity: 2,
            }],
            subtotal: Amount::from_minor(4000),
            discount: Amount::ZERO,
            total: Amount::from_minor(4000),
            applied_coupon: None,
            delivery,
        }
    }

    #[test]
    fn shipping_order_serializes_terminal_details() {
        let record = InsertOrderRecord::from(new_order(DeliveryDetails::Shipping {
            terminal: Terminal {
                id: TerminalId::from("LT0001"),
                name: "Central".to_string(),
                city: "Trakai".to_string(),
                address: "Vytauto g. 3".to_string(),
                postal_code: "21106".to_string(),
            },
        }));

        let json = serde_json::to_value(&record).expect("record should serialize");

        assert_eq!(json["delivery_method"], "shipping");
        assert_eq!(json["terminal_id"], "LT0001");
        assert_eq!(json["terminal_address"]["city"], "Trakai");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["total_price"], serde_json::json!(40.00));
        assert!(
            json.get("applied_coupon").is_none(),
            "absent coupon is omitted from the payload"
        );
    }

    #[test]
    fn pickup_order_serializes_fixed_address_without_terminal() {
        let record = InsertOrderRecord::from(new_order(DeliveryDetails::Pickup {
            location: PickupLocation::default(),
        }));

        let json = serde_json::to_value(&record).expect("record should serialize");

        assert_eq!(json["delivery_method"], "pickup");
        assert!(json.get("terminal_id").is_none());
        assert_eq!(json["terminal_address"]["postal_code"], "21143");
    }

    #[test]
    fn order_record_converts_to_model() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000009",
            "status": "pending",
            "total_price": 45.00,
            "created_at": "2025-06-01T10:00:00Z"
        }"#;

        let record: OrderRecord = serde_json::from_str(json).expect("record should parse");
        let order = Order::from(record);

        assert_eq!(order.status, "pending");
        assert_eq!(order.total, Amount::from_minor(4500));
    }
}
