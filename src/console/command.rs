//! Typed commands and the parsers that turn raw answers into them.

use crate::model::{ProductCreate, ProductUpdate};
use serde::{Deserialize, Serialize};

/// A fully parsed user request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Add(ProductCreate),
    Remove { name: String },
    Update { name: String, update: ProductUpdate },
    List,
    Exit,
}

/// Entries of the main menu, numbered as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Update,
    List,
    Exit,
}

/// Answer that leaves a field unchanged on update.
pub const KEEP_SENTINEL: &str = "-1";

pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Add),
        "2" => Some(MenuChoice::Remove),
        "3" => Some(MenuChoice::Update),
        "4" => Some(MenuChoice::List),
        "5" => Some(MenuChoice::Exit),
        _ => None,
    }
}

pub fn parse_quantity(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// Accepts finite, non-negative prices.
pub fn parse_price(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        // "-0" parses to -0.0
        .map(|price| price + 0.0)
}

/// Trimmed, non-empty product name.
pub fn parse_name(input: &str) -> Option<String> {
    let name = input.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// `Some(None)` means "keep the current value" (the sentinel or an empty answer).
pub fn parse_quantity_change(input: &str) -> Option<Option<u32>> {
    if is_keep(input) {
        return Some(None);
    }
    parse_quantity(input).map(Some)
}

pub fn parse_price_change(input: &str) -> Option<Option<f64>> {
    if is_keep(input) || input.trim().parse::<f64>() == Ok(-1.0) {
        return Some(None);
    }
    parse_price(input).map(Some)
}

fn is_keep(input: &str) -> bool {
    let input = input.trim();
    input.is_empty() || input == KEEP_SENTINEL
}
