//! Interactive inventory console.
//!
//! Builds the [`InventorySystem`], reads commands from standard input until the user picks
//! "Exit" (or input ends), then shuts the system down.

use stock_watch::console::{ConsolePrompt, ConsoleView, ProductView};
use stock_watch::lifecycle::{setup_tracing, InventorySystem};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    info!("Starting inventory console");

    let view: Arc<dyn ProductView> = Arc::new(ConsoleView);
    let system = InventorySystem::new(view.clone());
    let mut prompt = ConsolePrompt::stdin(view.clone());

    system.serve(&mut prompt, view.as_ref()).await?;
    info!("Inventory console closed");
    Ok(())
}
