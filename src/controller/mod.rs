//! # Inventory Controller
//!
//! Translates commands into [`InventoryClient`] calls and turns threshold alerts into
//! user-facing text. The controller holds no inventory state: every command is a
//! pass-through, and `NotFound` comes back to the caller unchanged so the presentation
//! layer chooses the wording.

use crate::console::ProductView;
use crate::inventory::{InventoryClient, InventoryError};
use crate::model::{Product, ProductCreate, ProductUpdate};
use crate::observers::{AlertSink, LOW_STOCK_THRESHOLD};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct InventoryController {
    client: InventoryClient,
    view: Arc<dyn ProductView>,
}

impl InventoryController {
    pub fn new(client: InventoryClient, view: Arc<dyn ProductView>) -> Self {
        Self { client, view }
    }

    #[instrument(skip(self))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<(), InventoryError> {
        self.client.add(Product::from(params)).await
    }

    pub async fn remove_product(&self, name: &str) -> Result<Product, InventoryError> {
        self.client.remove(name).await
    }

    pub async fn update_product(
        &self,
        name: &str,
        update: ProductUpdate,
    ) -> Result<Product, InventoryError> {
        self.client.update(name, update).await
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, InventoryError> {
        self.client.list().await
    }
}

impl AlertSink for InventoryController {
    fn on_low_stock(&self, product_name: &str) {
        info!(product = %product_name, "Low stock alert");
        self.view.show_message(&low_stock_alert(product_name));
    }

    fn on_high_stock(&self, product_name: &str) {
        info!(product = %product_name, "Stock full alert");
        self.view.show_message(&high_stock_alert(product_name));
    }
}

pub fn low_stock_alert(product_name: &str) -> String {
    format!("ALERT: quantity of product '{product_name}' is below {LOW_STOCK_THRESHOLD}!")
}

pub fn high_stock_alert(product_name: &str) -> String {
    format!("ALERT: stock full for product '{product_name}'!")
}
