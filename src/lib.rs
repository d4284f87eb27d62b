//! # Stock Watch
//!
//! > **An in-memory inventory that tells you when stock runs low or fills up.**
//!
//! Products are added, updated, removed and listed through a small console. Every time a
//! product's quantity is set, the inventory pushes the product to its registered observers;
//! the built-in observers raise an alert when the quantity drops below 5 or rises above 10.
//!
//! ## 🏗️ Design
//!
//! ### Subject and Observers
//! [`Inventory`](inventory::Inventory) is the subject. It owns the products and an ordered
//! registry of [`StockObserver`](observers::StockObserver) trait objects and knows nothing
//! about what they do. Notification is synchronous and follows registration order.
//!
//! ### Single Owner
//! The inventory lives inside an [`InventoryActor`](inventory::InventoryActor) on its own
//! Tokio task. Requests are processed one at a time: mutation, then every observer, then the
//! reply. When `client.update(..).await` returns, all alerts for that update have already
//! been shown.
//!
//! ### No Globals
//! [`InventorySystem`](lifecycle::InventorySystem) is the root object. It is built once in
//! `main`, wires actor, controller and observers together, and is shut down at exit.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: the [`Product`](model::Product) record and its create/update DTOs.
//! - [`observers`]: the observer capability, the alert sink and the threshold observers.
//! - [`inventory`]: the subject, its actor, client, errors and mock helpers.
//! - [`controller`]: command pass-through and alert formatting.
//! - [`console`]: menu, prompts, parsing and the command loop.
//! - [`lifecycle`]: system wiring, shutdown and tracing setup.
//!
//! ## 🚀 Running
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! ```

pub mod console;
pub mod controller;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod observers;
