//! # Mock Inventory
//!
//! Utilities for testing code that sits in front of an [`InventoryClient`] (such as the
//! controller) without spawning a real actor.
//!
//! [`create_mock_client`] returns a real client wired to a bare receiver. The test then
//! plays the actor: it pulls the next request with one of the `expect_*` helpers, asserts
//! on the payload, and answers through the returned responder.
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client(10);
//! let task = tokio::spawn(async move { client.remove("Widget").await });
//!
//! let (name, responder) = expect_remove(&mut receiver).await.expect("Expected Remove");
//! assert_eq!(name, "Widget");
//! responder.send(Err(InventoryError::NotFound(name))).unwrap();
//!
//! assert!(task.await.unwrap().is_err());
//! ```

use super::client::InventoryClient;
use super::message::{InventoryRequest, Response};
use crate::model::{Product, ProductUpdate};
use tokio::sync::mpsc;

/// Creates a client whose requests land in the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an `Add`.
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(Product, Response<()>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Add {
            product,
            respond_to,
        }) => Some((product, respond_to)),
        _ => None,
    }
}

pub async fn expect_remove(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, Response<Product>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Remove { name, respond_to }) => Some((name, respond_to)),
        _ => None,
    }
}

pub async fn expect_update(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, ProductUpdate, Response<Product>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Update {
            name,
            update,
            respond_to,
        }) => Some((name, update, respond_to)),
        _ => None,
    }
}

pub async fn expect_list(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<Response<Vec<Product>>> {
    match receiver.recv().await {
        Some(InventoryRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryError;

    #[tokio::test]
    async fn test_mock_client_add() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task =
            tokio::spawn(async move { client.add(Product::new("Widget", 3, 1.5)).await });

        let (product, responder) = expect_add(&mut receiver)
            .await
            .expect("Expected Add request");
        assert_eq!(product.name, "Widget");
        responder.send(Ok(())).unwrap();

        assert_eq!(add_task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn test_expect_helper_rejects_other_requests() {
        let (client, mut receiver) = create_mock_client(10);

        let list_task = tokio::spawn(async move { client.list().await });

        assert!(expect_remove(&mut receiver).await.is_none());
        // the List responder was dropped along with the request
        assert_eq!(list_task.await.unwrap(), Err(InventoryError::ActorDropped));
    }

    #[tokio::test]
    async fn test_closed_receiver_reports_actor_closed() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        assert_eq!(client.list().await, Err(InventoryError::ActorClosed));
    }
}
