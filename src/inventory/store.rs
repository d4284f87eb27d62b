//! # The Inventory Subject
//!
//! [`Inventory`] owns the product list and the observer registry. It is plain synchronous
//! state: the [`InventoryActor`](super::InventoryActor) owns one and feeds it requests one at
//! a time.
//!
//! ## Notification Rules
//!
//! - `add` notifies with the appended product.
//! - `update` notifies only when a quantity is supplied, even if the value is unchanged.
//!   A price change alone is silent.
//! - `remove` never notifies.
//!
//! Observers run in registration order, synchronously, before the mutating call returns.
//! They receive `&Product` while the inventory is borrowed, so an observer cannot call back
//! into the inventory during notification.

use crate::model::{Product, ProductUpdate};
use crate::observers::{same_observer, ObserverHandle};

/// Ordered product collection plus its ordered observer registry.
///
/// Names are not required to be unique; lookups pick the first product with a matching name.
#[derive(Default)]
pub struct Inventory {
    products: Vec<Product>,
    observers: Vec<ObserverHandle>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the product and notifies every observer with it.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
        if let Some(added) = self.products.last() {
            self.notify(added);
        }
    }

    /// Removes and returns the first product named `name`.
    pub fn remove(&mut self, name: &str) -> Option<Product> {
        let index = self.position(name)?;
        Some(self.products.remove(index))
    }

    /// Applies `update` to the first product named `name` and returns a snapshot of it.
    ///
    /// The quantity is written and notified before the price is written, so observers see
    /// the previous price when both fields change.
    pub fn update(&mut self, name: &str, update: ProductUpdate) -> Option<Product> {
        let index = self.position(name)?;
        if let Some(quantity) = update.quantity {
            self.products[index].quantity = quantity;
            self.notify(&self.products[index]);
        }
        if let Some(price) = update.price {
            self.products[index].price = price;
        }
        Some(self.products[index].clone())
    }

    /// Products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn register_observer(&mut self, observer: ObserverHandle) {
        self.observers.push(observer);
    }

    /// Removes the first registration of this observer instance. Returns false if it was
    /// never registered.
    pub fn deregister_observer(&mut self, observer: &ObserverHandle) -> bool {
        match self
            .observers
            .iter()
            .position(|registered| same_observer(registered, observer))
        {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Hands `product` to every registered observer, in registration order.
    pub fn notify(&self, product: &Product) {
        for observer in &self.observers {
            observer.react(product);
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|product| product.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::testing::RecordingSink;
    use crate::observers::{HighStockObserver, LowStockObserver};
    use std::sync::{Arc, Mutex};

    fn watched_inventory() -> (Inventory, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let mut inventory = Inventory::new();
        inventory.register_observer(Arc::new(LowStockObserver::new(&sink)));
        inventory.register_observer(Arc::new(HighStockObserver::new(&sink)));
        (inventory, sink)
    }

    #[test]
    fn test_add_appends_to_end_of_list() {
        let (mut inventory, _sink) = watched_inventory();
        inventory.add(Product::new("Bolt", 7, 0.25));
        inventory.add(Product::new("Widget", 8, 1.50));

        assert_eq!(inventory.list().last(), Some(&Product::new("Widget", 8, 1.50)));
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_add_fires_thresholds() {
        let (mut inventory, sink) = watched_inventory();
        inventory.add(Product::new("Low", 4, 1.0));
        inventory.add(Product::new("Five", 5, 1.0));
        inventory.add(Product::new("Ten", 10, 1.0));
        inventory.add(Product::new("High", 11, 1.0));

        assert_eq!(sink.alerts(), vec!["low:Low", "high:High"]);
    }

    #[test]
    fn test_repeated_quantity_update_alerts_every_time() {
        let (mut inventory, sink) = watched_inventory();
        inventory.add(Product::new("Widget", 8, 1.0));

        inventory.update("Widget", ProductUpdate::quantity(3));
        inventory.update("Widget", ProductUpdate::quantity(3));

        assert_eq!(sink.alerts(), vec!["low:Widget", "low:Widget"]);
    }

    #[test]
    fn test_price_only_update_is_silent() {
        let (mut inventory, sink) = watched_inventory();
        inventory.add(Product::new("Widget", 2, 1.0));
        sink.alerts.lock().unwrap().clear();

        let updated = inventory.update("Widget", ProductUpdate::price(9.99));

        assert_eq!(updated, Some(Product::new("Widget", 2, 9.99)));
        assert!(sink.alerts().is_empty());
    }

    #[test]
    fn test_observers_see_old_price_when_both_fields_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_by_observer = seen.clone();
        let mut inventory = Inventory::new();
        inventory.add(Product::new("Widget", 8, 1.0));
        inventory.register_observer(Arc::new(move |product: &Product| {
            seen_by_observer.lock().unwrap().push(product.clone());
        }));

        let updated = inventory.update(
            "Widget",
            ProductUpdate {
                quantity: Some(6),
                price: Some(2.0),
            },
        );

        assert_eq!(*seen.lock().unwrap(), vec![Product::new("Widget", 6, 1.0)]);
        assert_eq!(updated, Some(Product::new("Widget", 6, 2.0)));
    }

    #[test]
    fn test_missing_name_is_absent_and_unchanged() {
        let (mut inventory, _sink) = watched_inventory();
        inventory.add(Product::new("Widget", 8, 1.0));

        assert_eq!(inventory.remove("nonexistent"), None);
        assert_eq!(inventory.update("nonexistent", ProductUpdate::quantity(1)), None);
        assert_eq!(inventory.list(), &[Product::new("Widget", 8, 1.0)]);
    }

    #[test]
    fn test_duplicate_names_use_first_match() {
        let (mut inventory, _sink) = watched_inventory();
        inventory.add(Product::new("Widget", 6, 1.0));
        inventory.add(Product::new("Widget", 7, 2.0));

        let updated = inventory.update("Widget", ProductUpdate::quantity(9));
        assert_eq!(updated, Some(Product::new("Widget", 9, 1.0)));
        assert_eq!(inventory.list()[1], Product::new("Widget", 7, 2.0));

        let removed = inventory.remove("Widget");
        assert_eq!(removed, Some(Product::new("Widget", 9, 1.0)));
        assert_eq!(inventory.list(), &[Product::new("Widget", 7, 2.0)]);
    }

    #[test]
    fn test_observers_fire_in_registration_order() {
        let sink = Arc::new(RecordingSink::default());
        let mut inventory = Inventory::new();
        inventory.register_observer(Arc::new(HighStockObserver::with_threshold(&sink, 0)));
        inventory.register_observer(Arc::new(LowStockObserver::with_threshold(&sink, 20)));

        inventory.add(Product::new("Widget", 10, 1.0));

        assert_eq!(sink.alerts(), vec!["high:Widget", "low:Widget"]);
    }

    #[test]
    fn test_deregistered_observer_is_not_notified() {
        let (mut inventory, sink) = watched_inventory();
        let extra: ObserverHandle = Arc::new(LowStockObserver::new(&sink));
        inventory.register_observer(extra.clone());
        assert_eq!(inventory.observer_count(), 3);

        assert!(inventory.deregister_observer(&extra));
        assert!(!inventory.deregister_observer(&extra));
        inventory.add(Product::new("Widget", 1, 1.0));

        assert_eq!(sink.alerts(), vec!["low:Widget"]);
    }
}
