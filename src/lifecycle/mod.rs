//! # System Lifecycle
//!
//! Builds and tears down the running application.
//!
//! - [`InventorySystem`]: spawns the inventory actor, builds the controller, wires the
//!   threshold observers to it and owns the task handle for shutdown.
//! - [`setup_tracing`]: initializes structured logging.

pub mod inventory_system;
pub mod tracing;

pub use inventory_system::*;
pub use self::tracing::*;
