//! Output side of the console.

use crate::model::Product;
use std::io::Write;
use std::sync::Mutex;

pub const MENU: &str = "\nInventory Control Menu\n\
1. Add Product\n\
2. Remove Product\n\
3. Update Product\n\
4. List Products\n\
5. Exit";

pub const EMPTY_INVENTORY: &str = "No products in stock.";

/// Where display text and alerts go.
///
/// Implementations must be callable from the inventory task, since alerts are shown while
/// the triggering command is still in flight.
pub trait ProductView: Send + Sync {
    fn show_message(&self, message: &str);

    /// Shows one line per product, or the empty-state message.
    fn show_products(&self, products: &[Product]) {
        if products.is_empty() {
            self.show_message(EMPTY_INVENTORY);
        }
        for product in products {
            self.show_message(&product.to_string());
        }
    }

    fn show_menu(&self) {
        self.show_message(MENU);
    }

    /// Asks for input. Defaults to a regular message.
    fn show_prompt(&self, prompt: &str) {
        self.show_message(prompt);
    }
}

/// Writes to standard output.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl ProductView for ConsoleView {
    fn show_message(&self, message: &str) {
        println!("{message}");
    }

    fn show_prompt(&self, prompt: &str) {
        let mut stdout = std::io::stdout().lock();
        // a failed flush only delays the prompt text
        let _ = write!(stdout, "{prompt}").and_then(|_| stdout.flush());
    }
}

/// Collects everything shown, for assertions in tests. Prompts are not recorded.
#[derive(Debug, Default)]
pub struct RecordingView {
    messages: Mutex<Vec<String>>,
}

impl RecordingView {
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Messages starting with `ALERT:`, in order.
    pub fn alerts(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|message| message.starts_with("ALERT:"))
            .collect()
    }
}

impl ProductView for RecordingView {
    fn show_message(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }

    fn show_menu(&self) {}

    fn show_prompt(&self, _prompt: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_products_lists_each_product() {
        let view = RecordingView::default();
        view.show_products(&[Product::new("Widget", 3, 1.5), Product::new("Bolt", 7, 0.25)]);

        assert_eq!(
            view.messages(),
            vec![
                "Product: Widget, Quantity: 3, Price: $1.50",
                "Product: Bolt, Quantity: 7, Price: $0.25",
            ]
        );
    }

    #[test]
    fn test_show_products_empty_state() {
        let view = RecordingView::default();
        view.show_products(&[]);

        assert_eq!(view.messages(), vec![EMPTY_INVENTORY]);
    }
}
