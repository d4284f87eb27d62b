//! # Console Presentation
//!
//! The interactive text front end: it renders the menu, products and messages, and parses
//! raw input lines into typed [`Command`]s. Nothing in the inventory core depends on how
//! this is done.
//!
//! - [`ProductView`]: output side (messages, product lists, prompts).
//! - [`CommandSource`]: input side, yielding one [`Command`] at a time.
//! - [`run_session`]: the command loop that ties both to an
//!   [`InventoryController`](crate::controller::InventoryController).

mod command;
mod prompt;
mod session;
mod view;

pub use command::*;
pub use prompt::*;
pub use session::*;
pub use view::*;
