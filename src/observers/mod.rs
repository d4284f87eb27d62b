//! # Stock Observers
//!
//! Observers are the listeners the [`Inventory`](crate::inventory::Inventory) notifies after
//! every quantity-affecting mutation. The inventory only knows the [`StockObserver`]
//! capability; what an observer does with the product is its own business.
//!
//! The two built-in observers ([`LowStockObserver`], [`HighStockObserver`]) check a fixed
//! threshold and forward the product name to an [`AlertSink`]. They hold a [`Weak`](std::sync::Weak)
//! reference to the sink, so the sink's owner (the controller) is never kept alive by the
//! inventory that it drives.
//!
//! Any `Fn(&Product) + Send + Sync` closure is also a `StockObserver`.

mod high_stock;
mod low_stock;

pub use high_stock::*;
pub use low_stock::*;

use crate::model::Product;
use std::sync::Arc;

/// Quantities strictly below this value raise a low-stock alert.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Quantities strictly above this value raise a stock-full alert.
pub const HIGH_STOCK_THRESHOLD: u32 = 10;

/// A listener that is handed a product snapshot after its quantity was set.
///
/// `react` runs synchronously on the inventory's task, before the triggering call returns.
/// Implementations must not block and cannot mutate the product.
pub trait StockObserver: Send + Sync {
    fn react(&self, product: &Product);
}

impl<F> StockObserver for F
where
    F: Fn(&Product) + Send + Sync,
{
    fn react(&self, product: &Product) {
        self(product)
    }
}

/// Shared handle stored in the observer registry. Identity is the allocation.
pub type ObserverHandle = Arc<dyn StockObserver>;

/// Returns true when both handles point at the same observer instance.
pub fn same_observer(a: &ObserverHandle, b: &ObserverHandle) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

/// Receiver of threshold alerts.
pub trait AlertSink: Send + Sync {
    fn on_low_stock(&self, product_name: &str);
    fn on_high_stock(&self, product_name: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::AlertSink;
    use std::sync::Mutex;

    /// Records alerts as `low:<name>` / `high:<name>` in arrival order.
    #[derive(Default)]
    pub struct RecordingSink {
        pub alerts: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        pub fn alerts(&self) -> Vec<String> {
            self.alerts.lock().unwrap().clone()
        }
    }

    impl AlertSink for RecordingSink {
        fn on_low_stock(&self, product_name: &str) {
            self.alerts.lock().unwrap().push(format!("low:{product_name}"));
        }

        fn on_high_stock(&self, product_name: &str) {
            self.alerts.lock().unwrap().push(format!("high:{product_name}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_observer_compares_instances() {
        let a: ObserverHandle = Arc::new(|_: &Product| {});
        let b: ObserverHandle = Arc::new(|_: &Product| {});
        let a_again = a.clone();

        assert!(same_observer(&a, &a_again));
        assert!(!same_observer(&a, &b));
    }
}
