//! # Inventory
//!
//! The notification-dispatch core and the actor plumbing around it.
//!
//! - [`Inventory`]: the synchronous subject (products + observer registry).
//! - [`InventoryActor`]: owns one `Inventory` on its own task and serializes every operation.
//! - [`InventoryClient`]: the async handle used by the rest of the application.
//! - [`mock`]: helpers for testing client callers without an actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

pub use actor::{new, InventoryActor};
pub use client::InventoryClient;
pub use error::InventoryError;
pub use message::{InventoryRequest, Response};
pub use store::Inventory;
