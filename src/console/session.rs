//! The command loop.

use super::command::Command;
use super::prompt::CommandSource;
use super::view::ProductView;
use crate::controller::InventoryController;
use crate::inventory::InventoryError;
use tracing::{info, info_span, Instrument};

/// Feeds commands from `source` to `controller` until `Exit` or end of input.
///
/// `NotFound` is phrased for the user and the loop continues. Any other error means the
/// inventory is gone and ends the session.
pub async fn run_session<S: CommandSource>(
    controller: &InventoryController,
    source: &mut S,
    view: &dyn ProductView,
) -> Result<(), InventoryError> {
    while let Some(command) = source.next_command().await {
        if command == Command::Exit {
            break;
        }
        let span = info_span!("command", kind = command_kind(&command));
        execute(controller, command, view).instrument(span).await?;
    }
    info!("Session ended");
    Ok(())
}

async fn execute(
    controller: &InventoryController,
    command: Command,
    view: &dyn ProductView,
) -> Result<(), InventoryError> {
    match command {
        Command::Add(params) => {
            let name = params.name.clone();
            controller.add_product(params).await?;
            view.show_message(&format!("Product '{name}' added successfully."));
        }
        Command::Remove { name } => match controller.remove_product(&name).await {
            Ok(_) => view.show_message(&format!("Product '{name}' removed.")),
            Err(InventoryError::NotFound(_)) => view.show_message(&not_found(&name)),
            Err(e) => return Err(e),
        },
        Command::Update { name, update } => {
            match controller.update_product(&name, update).await {
                Ok(_) => view.show_message(&format!("Product '{name}' updated.")),
                Err(InventoryError::NotFound(_)) => view.show_message(&not_found(&name)),
                Err(e) => return Err(e),
            }
        }
        Command::List => view.show_products(&controller.list_products().await?),
        Command::Exit => {}
    }
    Ok(())
}

fn not_found(name: &str) -> String {
    format!("Product '{name}' not found.")
}

fn command_kind(command: &Command) -> &'static str {
    match command {
        Command::Add(_) => "add",
        Command::Remove { .. } => "remove",
        Command::Update { .. } => "update",
        Command::List => "list",
        Command::Exit => "exit",
    }
}
