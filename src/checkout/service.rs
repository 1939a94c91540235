//! Checkout service.

use std::sync::Arc;

use tracing::{Span, field, instrument, warn};

use crate::{
    cart::CartStore,
    checkout::{errors::CheckoutError, form::CheckoutForm},
    orders::{Order, OrdersService},
    payments::{PaymentOrderRequest, PaymentsService},
    shipping::models::{PickupLocation, Terminal},
};

/// Where a submission currently is. Phases advance strictly forward; a
/// failure stops the run in place rather than entering a phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutPhase {
    Idle,
    Validating,
    CreatingOrderRecord,
    CreatingPaymentOrder,
    Redirecting,
}

/// Callback surface for watching a submission progress, phase by phase.
pub trait CheckoutObserver: Send + Sync {
    fn on_phase(&self, _phase: CheckoutPhase) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CheckoutObserver for NoopObserver {}

/// Successful submission outcome: the recorded order and the hosted
/// payment page to send the customer to.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRedirect {
    pub order: Order,
    pub payment_url: String,
}

/// Orchestrates a checkout submission end to end: validate, record the
/// order, open a payment order, then clear the cart.
///
/// The cart is cleared only once the payment URL is in hand; any earlier
/// failure leaves it untouched so the customer can retry with the same
/// contents.
pub struct CheckoutService {
    orders: Arc<dyn OrdersService>,
    payments: Arc<dyn PaymentsService>,
    pickup: PickupLocation,
}

impl CheckoutService {
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrdersService>,
        payments: Arc<dyn PaymentsService>,
        pickup: PickupLocation,
    ) -> Self {
        Self {
            orders,
            payments,
            pickup,
        }
    }

    /// Submit the checkout form against the cart's current contents.
    ///
    /// `terminals` is the terminal list fetched for this submission; the
    /// form's terminal selection is re-resolved against it on every call.
    ///
    /// Concurrent submissions for the same cart are not serialized here;
    /// the caller must not start a second submission while one is in
    /// flight.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Validation`] before any remote call,
    /// [`CheckoutError::OrderCreation`] when the order record cannot be
    /// inserted, and [`CheckoutError::PaymentInitiation`] when the payment
    /// order cannot be opened for an already-inserted record.
    pub async fn submit(
        &self,
        cart: &CartStore,
        form: &CheckoutForm,
        terminals: &[Terminal],
    ) -> Result<CheckoutRedirect, CheckoutError> {
        self.submit_observed(cart, form, terminals, &NoopObserver)
            .await
    }

    /// [`CheckoutService::submit`] with progress reported to `observer`.
    #[instrument(skip_all, fields(order_uuid = field::Empty), err)]
    pub async fn submit_observed(
        &self,
        cart: &CartStore,
        form: &CheckoutForm,
        terminals: &[Terminal],
        observer: &dyn CheckoutObserver,
    ) -> Result<CheckoutRedirect, CheckoutError> {
        observer.on_phase(CheckoutPhase::Validating);

        let snapshot = cart.snapshot();
        let draft = form.validate(&snapshot.lines, terminals, &self.pickup)?;

        observer.on_phase(CheckoutPhase::CreatingOrderRecord);

        let total = draft.total;
        let customer_name = draft.customer_name.clone();
        let customer_email = draft.customer_email.clone();
        let customer_phone = draft.customer_phone.clone();

        let order = self
            .orders
            .create_order(draft)
            .await
            .map_err(CheckoutError::OrderCreation)?;

        Span::current().record("order_uuid", field::display(order.uuid));

        observer.on_phase(CheckoutPhase::CreatingPaymentOrder);

        let request = PaymentOrderRequest {
            merchant_reference: order.uuid,
            amount: total,
            customer_name,
            customer_email,
            customer_phone,
        };

        let payment = match self.payments.create_payment_order(&request).await {
            Ok(payment) => payment,
            Err(error) => {
                warn!(
                    order_uuid = %order.uuid,
                    "order record left pending: payment order creation failed"
                );

                return Err(CheckoutError::PaymentInitiation(error));
            }
        };

        observer.on_phase(CheckoutPhase::Redirecting);

        cart.clear();
        cart.close();

        Ok(CheckoutRedirect {
            order,
            payment_url: payment.payment_url,
        })
    }
}
