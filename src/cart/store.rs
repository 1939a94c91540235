//! Cart store.

use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use crate::{
    cart::{
        errors::CartError,
        models::{CartLine, CartSnapshot},
    },
    catalog::models::ProductUuid,
};

type Subscriber = Arc<dyn Fn(&CartSnapshot) + Send + Sync>;

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The session cart: an ordered set of lines, unique per product, plus the
/// drawer-open flag.
///
/// The store is an explicitly owned container: construct one per session
/// (or per test) and hand it to whatever renders cart contents. Every
/// mutation notifies subscribers synchronously with the post-mutation
/// snapshot; the state lock is released before callbacks run, so a callback
/// may freely mutate the store again without deadlocking.
#[derive(Default)]
pub struct CartStore {
    state: Mutex<CartSnapshot>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the cart. If a line for the same product already
    /// exists, its quantity is incremented instead; the existing display
    /// snapshot is kept.
    ///
    /// Stock limits are not checked here; the caller compares against
    /// catalog data before calling.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] when `line.quantity` is 0.
    pub fn add_line(&self, line: CartLine) -> Result<(), CartError> {
        if line.quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let snapshot = {
            let mut state = self.state();

            match state.lines.iter_mut().find(|l| l.product == line.product) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => state.lines.push(line),
            }

            state.clone()
        };

        self.notify(&snapshot);

        Ok(())
    }

    /// Set the quantity of an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] for a quantity of 0 (callers
    /// clamp to 1 or call [`CartStore::remove_line`] explicitly) and
    /// [`CartError::LineNotFound`] when no line for the product exists.
    pub fn update_quantity(&self, product: ProductUuid, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let snapshot = {
            let mut state = self.state();

            let line = state
                .lines
                .iter_mut()
                .find(|l| l.product == product)
                .ok_or(CartError::LineNotFound)?;

            line.quantity = quantity;

            state.clone()
        };

        self.notify(&snapshot);

        Ok(())
    }

    /// Remove the line for the given product. Removing an absent product is
    /// a no-op, not an error, and fires no notification.
    pub fn remove_line(&self, product: ProductUuid) {
        let snapshot = {
            let mut state = self.state();
            let before = state.lines.len();

            state.lines.retain(|l| l.product != product);

            if state.lines.len() == before {
                return;
            }

            state.clone()
        };

        self.notify(&snapshot);
    }

    /// Empty the cart. Used after a successful order submission.
    pub fn clear(&self) {
        let snapshot = {
            let mut state = self.state();
            state.lines.clear();
            state.clone()
        };

        self.notify(&snapshot);
    }

    pub fn open(&self) {
        self.set_open(true);
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    pub fn toggle(&self) {
        let snapshot = {
            let mut state = self.state();
            state.is_open = !state.is_open;
            state.clone()
        };

        self.notify(&snapshot);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state().is_open
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state().lines.is_empty()
    }

    /// Copy of the current lines.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.state().lines.clone()
    }

    /// Copy of the full state.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        self.state().clone()
    }

    /// Register a callback invoked synchronously after every mutation with
    /// the new state.
    pub fn subscribe(
        &self,
        subscriber: impl Fn(&CartSnapshot) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));

        self.subscribers_lock().push((id, Arc::new(subscriber)));

        id
    }

    /// Drop a subscription. Returns `false` when the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers_lock();
        let before = subscribers.len();

        subscribers.retain(|(sub_id, _)| *sub_id != id);

        subscribers.len() != before
    }

    fn set_open(&self, is_open: bool) {
        let snapshot = {
            let mut state = self.state();
            state.is_open = is_open;
            state.clone()
        };

        self.notify(&snapshot);
    }

    fn state(&self) -> MutexGuard<'_, CartSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn subscribers_lock(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Subscriber)>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// The subscriber list is copied out before any callback runs, so a
    /// callback may subscribe, unsubscribe, or mutate the store again.
    fn notify(&self, snapshot: &CartSnapshot) {
        let subscribers: Vec<Subscriber> = self
            .subscribers_lock()
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();

        for subscriber in subscribers {
            subscriber(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use crate::money::Amount;

    use super::*;

    fn line(product: ProductUuid, cents: u64, quantity: u32) -> CartLine {
        CartLine {
            product,
            name: "Lip Balm".to_string(),
            unit_price: Amount::from_minor(cents),
            image_url: String::new(),
            quantity,
        }
    }

    #[test]
    fn adding_same_product_merges_quantities() {
        let store = CartStore::new();
        let product = ProductUuid::new();

        store.add_line(line(product, 500, 1)).expect("first add");
        store.add_line(line(product, 500, 2)).expect("second add");

        let lines = store.lines();

        assert_eq!(lines.len(), 1, "no duplicate lines for one product");
        assert_eq!(lines[0].quantity, 3);
    }

    #[test]
    fn merge_keeps_original_snapshot() {
        let store = CartStore::new();
        let product = ProductUuid::new();

        store.add_line(line(product, 500, 1)).expect("first add");
        // Same product added again with a different (changed) catalog price.
        store.add_line(line(product, 900, 1)).expect("second add");

        assert_eq!(store.lines()[0].unit_price, Amount::from_minor(500));
    }

    #[test]
    fn add_rejects_zero_quantity() {
        let store = CartStore::new();

        let result = store.add_line(line(ProductUuid::new(), 500, 0));

        assert_eq!(result, Err(CartError::ZeroQuantity));
        assert!(store.is_empty());
    }

    #[test]
    fn update_quantity_rejects_zero() {
        let store = CartStore::new();
        let product = ProductUuid::new();

        store.add_line(line(product, 500, 2)).expect("add");

        let result = store.update_quantity(product, 0);

        assert_eq!(result, Err(CartError::ZeroQuantity));
        assert_eq!(store.lines()[0].quantity, 2, "line must stay untouched");
    }

    #[test]
    fn update_quantity_unknown_product_is_line_not_found() {
        let store = CartStore::new();

        let result = store.update_quantity(ProductUuid::new(), 3);

        assert_eq!(result, Err(CartError::LineNotFound));
    }

    #[test]
    fn remove_absent_product_is_a_noop() {
        let store = CartStore::new();
        let product = ProductUuid::new();

        store.add_line(line(product, 500, 1)).expect("add");
        store.remove_line(ProductUuid::new());

        assert_eq!(store.lines().len(), 1);
    }

    #[test]
    fn every_retained_line_has_positive_quantity() {
        let store = CartStore::new();
        let a = ProductUuid::new();
        let b = ProductUuid::new();

        store.add_line(line(a, 100, 1)).expect("add a");
        store.add_line(line(b, 200, 4)).expect("add b");
        store.update_quantity(b, 1).expect("update b");
        let _zero = store.update_quantity(a, 0);
        store.remove_line(a);

        assert!(store.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn clear_empties_lines() {
        let store = CartStore::new();

        store
            .add_line(line(ProductUuid::new(), 100, 1))
            .expect("add");
        store.clear();

        assert!(store.is_empty());
    }

    #[test]
    fn toggle_flips_open_flag() {
        let store = CartStore::new();

        assert!(!store.is_open());
        store.toggle();
        assert!(store.is_open());
        store.close();
        assert!(!store.is_open());
    }

    #[test]
    fn subscribers_see_post_mutation_state() {
        let store = CartStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        store.subscribe(move |snapshot| {
            seen_clone
                .lock()
                .expect("test lock")
                .push(snapshot.lines.len());
        });

        store
            .add_line(line(ProductUuid::new(), 100, 1))
            .expect("add");
        store.clear();

        assert_eq!(*seen.lock().expect("test lock"), vec![1, 0]);
    }

    #[test]
    fn unsubscribed_callback_is_not_called() {
        let store = CartStore::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = Arc::clone(&calls);
        let id = store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id), "second unsubscribe returns false");

        store.open();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn reentrant_mutation_from_subscriber_does_not_deadlock() {
        let store = Arc::new(CartStore::new());

        let store_clone = Arc::clone(&store);
        store.subscribe(move |snapshot| {
            // Re-enter the store while handling a notification.
            if !snapshot.is_open {
                store_clone.open();
            }
        });

        store
            .add_line(line(ProductUuid::new(), 100, 1))
            .expect("add");

        assert!(store.is_open());
    }
}
