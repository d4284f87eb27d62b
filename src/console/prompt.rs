//! Input side of the console.

use super::command::{
    parse_menu_choice, parse_name, parse_price, parse_price_change, parse_quantity, parse_quantity_change,
    Command, MenuChoice,
};
use super::view::ProductView;
use crate::model::{ProductCreate, ProductUpdate};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

pub const INVALID_OPTION: &str = "Invalid option! Try again.";
pub const INVALID_NUMBER: &str = "Invalid number, try again.";
pub const INVALID_NAME: &str = "Product name cannot be empty, try again.";

/// Produces commands for the session loop. `None` means input is exhausted.
#[async_trait]
pub trait CommandSource: Send {
    async fn next_command(&mut self) -> Option<Command>;
}

/// Reads the menu-driven dialogue line by line.
///
/// Invalid menu choices and malformed numbers are answered with a message and asked again;
/// only well-typed commands leave this type.
pub struct ConsolePrompt<R> {
    lines: Lines<R>,
    view: Arc<dyn ProductView>,
}

impl ConsolePrompt<BufReader<Stdin>> {
    pub fn stdin(view: Arc<dyn ProductView>) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), view)
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsolePrompt<R> {
    pub fn new(reader: R, view: Arc<dyn ProductView>) -> Self {
        Self {
            lines: reader.lines(),
            view,
        }
    }

    async fn ask(&mut self, prompt: &str) -> Option<String> {
        self.view.show_prompt(prompt);
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Failed to read input");
                None
            }
        }
    }

    /// Asks until `parse` accepts the answer, showing `invalid` after each rejection.
    async fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Option<T>,
        invalid: &str,
    ) -> Option<T> {
        loop {
            let answer = self.ask(prompt).await?;
            match parse(&answer) {
                Some(value) => return Some(value),
                None => self.view.show_message(invalid),
            }
        }
    }

    async fn ask_parsed<T>(&mut self, prompt: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
        self.ask_until(prompt, parse, INVALID_NUMBER).await
    }

    async fn ask_name(&mut self, action: &str) -> Option<String> {
        let prompt = format!("Product name to {action}: ");
        self.ask_until(&prompt, parse_name, INVALID_NAME).await
    }

    async fn read_add(&mut self) -> Option<Command> {
        let name = self.ask_name("add").await?;
        let quantity = self.ask_parsed("Quantity: ", parse_quantity).await?;
        let price = self.ask_parsed("Price: ", parse_price).await?;
        Some(Command::Add(ProductCreate {
            name,
            quantity,
            price,
        }))
    }

    async fn read_update(&mut self) -> Option<Command> {
        let name = self.ask_name("update").await?;
        let quantity = self
            .ask_parsed("New quantity (or -1 to keep): ", parse_quantity_change)
            .await?;
        let price = self
            .ask_parsed("New price (or -1 to keep): ", parse_price_change)
            .await?;
        Some(Command::Update {
            name,
            update: ProductUpdate { quantity, price },
        })
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> CommandSource for ConsolePrompt<R> {
    async fn next_command(&mut self) -> Option<Command> {
        loop {
            self.view.show_menu();
            let answer = self.ask("Choose an option: ").await?;
            let command = match parse_menu_choice(&answer) {
                Some(MenuChoice::Add) => self.read_add().await?,
                Some(MenuChoice::Remove) => Command::Remove {
                    name: self.ask_name("remove").await?,
                },
                Some(MenuChoice::Update) => self.read_update().await?,
                Some(MenuChoice::List) => Command::List,
                Some(MenuChoice::Exit) => Command::Exit,
                None => {
                    self.view.show_message(INVALID_OPTION);
                    continue;
                }
            };
            return Some(command);
        }
    }
}
