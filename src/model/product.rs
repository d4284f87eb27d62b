//! The [`Product`] record and the DTOs used to create and update it.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Represents a product in the inventory.
///
/// The `name` is the lookup key. It is set once at creation and never renamed;
/// `quantity` and `price` are mutated in place by
/// [`Inventory::update`](crate::inventory::Inventory::update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `name` - Product name, used as the lookup key
    /// * `quantity` - Units in stock
    /// * `price` - Unit price
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}, Quantity: {}, Price: ${:.2}",
            self.name, self.quantity, self.price
        )
    }
}

/// DTO for Product creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl From<ProductCreate> for Product {
    fn from(params: ProductCreate) -> Self {
        Self::new(params.name, params.quantity, params.price)
    }
}

/// DTO for Product updates. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub quantity: Option<u32>,
    pub price: Option<f64>,
}

impl ProductUpdate {
    pub fn quantity(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            price: None,
        }
    }

    pub fn price(price: f64) -> Self {
        Self {
            quantity: None,
            price: Some(price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_price_with_two_decimals() {
        let product = Product::new("Widget", 3, 1.5);
        assert_eq!(
            product.to_string(),
            "Product: Widget, Quantity: 3, Price: $1.50"
        );
    }

    #[test]
    fn test_create_params_convert_into_product() {
        let params = ProductCreate {
            name: "Gadget".to_string(),
            quantity: 12,
            price: 9.99,
        };
        assert_eq!(Product::from(params), Product::new("Gadget", 12, 9.99));
    }

    #[test]
    fn test_update_constructors_leave_other_field_unset() {
        assert_eq!(ProductUpdate::quantity(4).price, None);
        assert_eq!(ProductUpdate::price(2.0).quantity, None);
        assert_eq!(ProductUpdate::default(), ProductUpdate { quantity: None, price: None });
    }
}
