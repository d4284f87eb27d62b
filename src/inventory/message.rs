//! # Inventory Messages
//!
//! The request type sent from [`InventoryClient`](super::InventoryClient) to
//! [`InventoryActor`](super::InventoryActor). Every variant carries a oneshot sender; the
//! actor replies only after the mutation and its notifications have completed.

use super::error::InventoryError;
use crate::model::{Product, ProductUpdate};
use crate::observers::ObserverHandle;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, InventoryError>>;

pub enum InventoryRequest {
    Add {
        product: Product,
        respond_to: Response<()>,
    },
    Remove {
        name: String,
        respond_to: Response<Product>,
    },
    Update {
        name: String,
        update: ProductUpdate,
        respond_to: Response<Product>,
    },
    List {
        respond_to: Response<Vec<Product>>,
    },
    RegisterObserver {
        observer: ObserverHandle,
        respond_to: Response<()>,
    },
    DeregisterObserver {
        observer: ObserverHandle,
        respond_to: Response<bool>,
    },
}

impl InventoryRequest {
    /// Short operation name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "Add",
            Self::Remove { .. } => "Remove",
            Self::Update { .. } => "Update",
            Self::List { .. } => "List",
            Self::RegisterObserver { .. } => "RegisterObserver",
            Self::DeregisterObserver { .. } => "DeregisterObserver",
        }
    }
}
