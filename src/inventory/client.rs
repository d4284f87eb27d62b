//! # Inventory Client
//!
//! Cheap-to-clone handle for talking to a running [`InventoryActor`](super::InventoryActor).
//! Each method sends one request and awaits the actor's reply.

use super::error::InventoryError;
use super::message::InventoryRequest;
use crate::model::{Product, ProductUpdate};
use crate::observers::ObserverHandle;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    /// Appends a product. Resolves after every observer has seen it.
    #[instrument(skip(self, product), fields(product = %product.name))]
    pub async fn add(&self, product: Product) -> Result<(), InventoryError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(InventoryRequest::Add {
            product,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| InventoryError::ActorDropped)?
    }

    /// Removes the first product with this name.
    #[instrument(skip(self))]
    pub async fn remove(&self, name: &str) -> Result<Product, InventoryError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(InventoryRequest::Remove {
            name: name.to_string(),
            respond_to,
        })
        .await?;
        response.await.map_err(|_| InventoryError::ActorDropped)?
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        name: &str,
        update: ProductUpdate,
    ) -> Result<Product, InventoryError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(InventoryRequest::Update {
            name: name.to_string(),
            update,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| InventoryError::ActorDropped)?
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, InventoryError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(InventoryRequest::List { respond_to }).await?;
        response.await.map_err(|_| InventoryError::ActorDropped)?
    }

    #[instrument(skip_all)]
    pub async fn register_observer(&self, observer: ObserverHandle) -> Result<(), InventoryError> {
        let (respond_to, response) = oneshot::channel();
        self.send(InventoryRequest::RegisterObserver {
            observer,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| InventoryError::ActorDropped)?
    }

    /// Returns `false` when the observer was not registered.
    #[instrument(skip_all)]
    pub async fn deregister_observer(
        &self,
        observer: ObserverHandle,
    ) -> Result<bool, InventoryError> {
        let (respond_to, response) = oneshot::channel();
        self.send(InventoryRequest::DeregisterObserver {
            observer,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| InventoryError::ActorDropped)?
    }

    async fn send(&self, request: InventoryRequest) -> Result<(), InventoryError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| InventoryError::ActorClosed)
    }
}
