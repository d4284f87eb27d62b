use super::{AlertSink, StockObserver, HIGH_STOCK_THRESHOLD};
use crate::model::Product;
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

/// Alerts when a product's quantity rises above the threshold.
pub struct HighStockObserver {
    sink: Weak<dyn AlertSink>,
    threshold: u32,
}

impl HighStockObserver {
    /// Creates an observer using [`HIGH_STOCK_THRESHOLD`].
    pub fn new<S: AlertSink + 'static>(sink: &Arc<S>) -> Self {
        Self::with_threshold(sink, HIGH_STOCK_THRESHOLD)
    }

    pub fn with_threshold<S: AlertSink + 'static>(sink: &Arc<S>, threshold: u32) -> Self {
        let sink: Weak<S> = Arc::downgrade(sink);
        let sink: Weak<dyn AlertSink> = sink;
        Self { sink, threshold }
    }
}

impl StockObserver for HighStockObserver {
    fn react(&self, product: &Product) {
        if product.quantity <= self.threshold {
            return;
        }
        match self.sink.upgrade() {
            Some(sink) => {
                debug!(product = %product.name, quantity = product.quantity, "Stock full");
                sink.on_high_stock(&product.name);
            }
            None => warn!(product = %product.name, "Stock full alert dropped, sink is gone"),
        }
    }
}
