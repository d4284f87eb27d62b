//! Pure data structures managed by the [`Inventory`](crate::inventory::Inventory).

pub mod product;

pub use product::*;
