//! # Inventory Actor
//!
//! The "server" half of the inventory. It owns the [`Inventory`] and the receiving end of
//! the mailbox, and processes one [`InventoryRequest`] at a time.
//!
//! Because a single task owns the state, add/remove/update are serialized without a lock.
//! Each request runs to completion (mutation, then every observer, then the reply) before
//! the next one is read, so a caller awaiting the reply knows all alerts have already been
//! delivered.

use super::client::InventoryClient;
use super::error::InventoryError;
use super::message::InventoryRequest;
use super::store::Inventory;
use crate::observers::ObserverHandle;
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

pub struct InventoryActor {
    receiver: mpsc::Receiver<InventoryRequest>,
    inventory: Inventory,
}

impl InventoryActor {
    pub fn new(buffer_size: usize) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            inventory: Inventory::new(),
        };
        (actor, InventoryClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// # Late Binding
    /// `observers` are registered before the first message is processed. They usually hold
    /// a weak reference to a controller that itself holds this actor's client, so they can
    /// only be built after [`InventoryActor::new`] has returned the client.
    pub async fn run(mut self, observers: Vec<ObserverHandle>) {
        for observer in observers {
            self.inventory.register_observer(observer);
        }
        info!(observers = self.inventory.observer_count(), "Inventory actor started");

        while let Some(request) = self.receiver.recv().await {
            trace!(kind = request.kind(), "Received");
            self.handle(request);
        }

        info!(size = self.inventory.len(), "Inventory actor shutdown");
    }

    fn handle(&mut self, request: InventoryRequest) {
        match request {
            InventoryRequest::Add {
                product,
                respond_to,
            } => {
                debug!(?product, "Add");
                let name = product.name.clone();
                self.inventory.add(product);
                info!(product = %name, size = self.inventory.len(), "Added");
                let _ = respond_to.send(Ok(()));
            }
            InventoryRequest::Remove { name, respond_to } => {
                debug!(product = %name, "Remove");
                let result = match self.inventory.remove(&name) {
                    Some(product) => {
                        info!(product = %name, size = self.inventory.len(), "Removed");
                        Ok(product)
                    }
                    None => {
                        warn!(product = %name, "Not found");
                        Err(InventoryError::NotFound(name))
                    }
                };
                let _ = respond_to.send(result);
            }
            InventoryRequest::Update {
                name,
                update,
                respond_to,
            } => {
                debug!(product = %name, ?update, "Update");
                let result = match self.inventory.update(&name, update) {
                    Some(product) => {
                        info!(product = %name, quantity = product.quantity, "Updated");
                        Ok(product)
                    }
                    None => {
                        warn!(product = %name, "Not found");
                        Err(InventoryError::NotFound(name))
                    }
                };
                let _ = respond_to.send(result);
            }
            InventoryRequest::List { respond_to } => {
                debug!(size = self.inventory.len(), "List");
                let _ = respond_to.send(Ok(self.inventory.list().to_vec()));
            }
            InventoryRequest::RegisterObserver {
                observer,
                respond_to,
            } => {
                self.inventory.register_observer(observer);
                info!(observers = self.inventory.observer_count(), "Observer registered");
                let _ = respond_to.send(Ok(()));
            }
            InventoryRequest::DeregisterObserver {
                observer,
                respond_to,
            } => {
                let removed = self.inventory.deregister_observer(&observer);
                info!(
                    removed,
                    observers = self.inventory.observer_count(),
                    "Observer deregistered"
                );
                let _ = respond_to.send(Ok(removed));
            }
        }
    }
}

/// Creates a new Inventory actor and its client.
pub fn new(buffer_size: usize) -> (InventoryActor, InventoryClient) {
    InventoryActor::new(buffer_size)
}
