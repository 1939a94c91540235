//! Checkout form.

use crate::{
    cart::models::CartLine,
    checkout::errors::ValidationError,
    coupons::CouponEntry,
    orders::models::{DeliveryDetails, NewOrder, OrderLine},
    pricing,
    shipping::models::{PickupLocation, Terminal, TerminalId},
};

/// The delivery option picked in the form, by key only. Resolution against
/// live shipping data happens at submission time in
/// [`CheckoutForm::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliverySelection {
    /// Ship to the parcel terminal with this id.
    Shipping { terminal: TerminalId },
    /// Pick up in store at the location with this key.
    Pickup { location: String },
}

/// Customer details gathered before submission.
///
/// The form is plain data plus the applied-coupon slot; it holds no
/// references into the cart, so the cart may change freely while the
/// customer types. Consistency is established by [`CheckoutForm::validate`],
/// which prices a single cart snapshot.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery: DeliverySelection,
    pub coupon: CouponEntry,
}

impl CheckoutForm {
    /// Check the form against a cart snapshot and the currently available
    /// delivery options, producing the order payload to submit.
    ///
    /// The terminal selection is re-resolved against `terminals` on every
    /// call, so a terminal that disappeared from the carrier list since it
    /// was picked is rejected rather than silently ordered to.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ValidationError`]; field checks run
    /// before delivery resolution.
    pub fn validate(
        &self,
        lines: &[CartLine],
        terminals: &[Terminal],
        pickup: &PickupLocation,
    ) -> Result<NewOrder, ValidationError> {
        if lines.is_empty() {
            return Err(ValidationError::EmptyCart);
        }

        let customer_name = required(&self.customer_name, ValidationError::MissingName)?;
        let customer_email = required(&self.customer_email, ValidationError::MissingEmail)?;
        let customer_phone = required(&self.customer_phone, ValidationError::MissingPhone)?;

        let delivery = match &self.delivery {
            DeliverySelection::Shipping { terminal } => {
                let terminal = terminals
                    .iter()
                    .find(|candidate| candidate.id == *terminal)
                    .cloned()
                    .ok_or_else(|| ValidationError::UnknownTerminal(terminal.to_string()))?;

                DeliveryDetails::Shipping { terminal }
            }
            DeliverySelection::Pickup { location } => {
                if *location != pickup.id {
                    return Err(ValidationError::UnknownPickupLocation(location.clone()));
                }

                DeliveryDetails::Pickup {
                    location: pickup.clone(),
                }
            }
        };

        let subtotal = pricing::subtotal(lines);
        let discount = pricing::discount_amount(subtotal, self.coupon.applied());
        let total = pricing::grand_total(subtotal, discount);

        Ok(NewOrder {
            customer_name,
            customer_email,
            customer_phone,
            lines: lines.iter().map(order_line).collect(),
            subtotal,
            discount,
            total,
            applied_coupon: self.coupon.applied().map(|coupon| coupon.code.clone()),
            delivery,
        })
    }
}

fn required(value: &str, error: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed.to_string())
    }
}

fn order_line(line: &CartLine) -> OrderLine {
    OrderLine {
        product: line.product,
        name: line.name.clone(),
        unit_price: line.unit_price,
        quantity: line.quantity,
    }
}
