//! Store context.

use std::sync::Arc;

use crate::{
    cart::CartStore,
    catalog::{CatalogService, RestCatalogService},
    checkout::CheckoutService,
    config::StoreConfig,
    coupons::{CouponsService, RestCouponsService},
    orders::{OrdersService, RestOrdersService},
    payments::{PaymentsService, RestPaymentsService},
    shipping::{RestTerminalsService, TerminalsService},
};

/// The composition root: one session's cart plus shared clients for every
/// remote concern.
///
/// Services are trait objects so tests and embedders can substitute their
/// own implementations; [`StoreContext::from_config`] wires up the REST
/// clients used in production.
pub struct StoreContext {
    pub catalog: Arc<dyn CatalogService>,
    pub coupons: Arc<dyn CouponsService>,
    pub terminals: Arc<dyn TerminalsService>,
    pub orders: Arc<dyn OrdersService>,
    pub payments: Arc<dyn PaymentsService>,
    pub cart: Arc<CartStore>,
    pub checkout: CheckoutService,
}

impl StoreContext {
    #[must_use]
    pub fn from_config(config: StoreConfig) -> Self {
        let orders: Arc<dyn OrdersService> =
            Arc::new(RestOrdersService::new(config.backend.clone()));
        let payments: Arc<dyn PaymentsService> =
            Arc::new(RestPaymentsService::new(config.payment));

        let checkout = CheckoutService::new(
            Arc::clone(&orders),
            Arc::clone(&payments),
            config.pickup,
        );

        Self {
            catalog: Arc::new(RestCatalogService::new(config.backend.clone())),
            coupons: Arc::new(RestCouponsService::new(config.backend)),
            terminals: Arc::new(RestTerminalsService::new(config.shipping)),
            orders,
            payments,
            cart: Arc::new(CartStore::new()),
            checkout,
        }
    }
}
