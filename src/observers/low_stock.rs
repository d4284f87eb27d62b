use super::{AlertSink, StockObserver, LOW_STOCK_THRESHOLD};
use crate::model::Product;
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

/// Alerts when a product's quantity drops below the threshold.
pub struct LowStockObserver {
    sink: Weak<dyn AlertSink>,
    threshold: u32,
}

impl LowStockObserver {
    /// Creates an observer using [`LOW_STOCK_THRESHOLD`].
    pub fn new<S: AlertSink + 'static>(sink: &Arc<S>) -> Self {
        Self::with_threshold(sink, LOW_STOCK_THRESHOLD)
    }

    pub fn with_threshold<S: AlertSink + 'static>(sink: &Arc<S>, threshold: u32) -> Self {
        let sink: Weak<S> = Arc::downgrade(sink);
        let sink: Weak<dyn AlertSink> = sink;
        Self { sink, threshold }
    }
}

impl StockObserver for LowStockObserver {
    fn react(&self, product: &Product) {
        if product.quantity >= self.threshold {
            return;
        }
        match self.sink.upgrade() {
            Some(sink) => {
                debug!(product = %product.name, quantity = product.quantity, "Low stock");
                sink.on_low_stock(&product.name);
            }
            None => warn!(product = %product.name, "Low stock alert dropped, sink is gone"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::testing::RecordingSink;

    #[test]
    fn test_fires_only_below_threshold() {
        let sink = Arc::new(RecordingSink::default());
        let observer = LowStockObserver::new(&sink);

        observer.react(&Product::new("Widget", 4, 1.0));
        observer.react(&Product::new("Widget", 5, 1.0));
        observer.react(&Product::new("Gizmo", 0, 1.0));

        assert_eq!(sink.alerts(), vec!["low:Widget", "low:Gizmo"]);
    }

    #[test]
    fn test_dropped_sink_is_skipped() {
        let sink = Arc::new(RecordingSink::default());
        let observer = LowStockObserver::new(&sink);
        drop(sink);

        // must not panic
        observer.react(&Product::new("Widget", 1, 1.0));
    }
}
