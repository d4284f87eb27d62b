//! Error types for the Inventory actor.

use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// No product with this name exists. The caller decides how to phrase it.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The actor's mailbox is closed; the inventory is no longer running.
    #[error("Inventory actor closed")]
    ActorClosed,

    /// The actor dropped the reply channel before answering.
    #[error("Inventory actor dropped response channel")]
    ActorDropped,
}
