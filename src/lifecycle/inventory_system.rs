use crate::console::{run_session, CommandSource, ProductView};
use crate::controller::InventoryController;
use crate::inventory::InventoryClient;
use crate::observers::{HighStockObserver, LowStockObserver, ObserverHandle};
use std::sync::Arc;
use tracing::{error, info};

/// Mailbox size of the inventory actor.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// The root object of the application.
///
/// `InventorySystem` is responsible for:
/// - **Lifecycle Management**: starting the inventory actor and stopping it on shutdown
/// - **Dependency Wiring**: controller → client → actor, and observers → controller
///
/// # Wiring Order
///
/// The controller needs the actor's client, and the observers need the controller. The
/// actor is therefore created first, the controller second, and the observers are handed
/// to [`InventoryActor::run`](crate::inventory::InventoryActor::run) last. Observers only
/// hold weak references to the controller, so there is no ownership cycle.
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new(Arc::new(ConsoleView));
/// system.controller.add_product(params).await?;
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Command entry point; also the alert sink of the default observers.
    pub controller: Arc<InventoryController>,

    /// Direct handle to the inventory actor, e.g. for registering extra observers.
    pub client: InventoryClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Starts the system with the default mailbox size. Must be called inside a Tokio runtime.
    pub fn new(view: Arc<dyn ProductView>) -> Self {
        Self::with_buffer_size(DEFAULT_BUFFER_SIZE, view)
    }

    pub fn with_buffer_size(buffer_size: usize, view: Arc<dyn ProductView>) -> Self {
        let (actor, client) = crate::inventory::new(buffer_size);
        let controller = Arc::new(InventoryController::new(client.clone(), view));

        let observers: Vec<ObserverHandle> = vec![
            Arc::new(LowStockObserver::new(&controller)),
            Arc::new(HighStockObserver::new(&controller)),
        ];
        let handle = tokio::spawn(actor.run(observers));

        info!(buffer_size, "Inventory system started");
        Self {
            controller,
            client,
            handles: vec![handle],
        }
    }

    /// Runs the command loop over `source`, then shuts down.
    ///
    /// The actor is joined even when the session fails; the session error wins over a
    /// shutdown error.
    pub async fn serve<S: CommandSource>(
        self,
        source: &mut S,
        view: &dyn ProductView,
    ) -> Result<(), String> {
        let session = run_session(&self.controller, source, view).await;
        if let Err(e) = &session {
            error!(error = %e, "Session aborted");
        }

        let shutdown = self.shutdown().await;
        session.map_err(|e| e.to_string())?;
        shutdown
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the controller and the client closes the actor's mailbox; the actor then
    /// finishes its loop. Clones of the client or controller held elsewhere keep the actor
    /// alive, so drop them before calling this.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.controller);
        drop(self.client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
