//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category label applied when a product is created without one
pub const DEFAULT_CATEGORY: &str = "General";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the server, immutable once assigned
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units on hand, never negative
    #[serde(default)]
    pub stock: i64,
    #[serde(default = "default_category")]
    pub category: String,
    /// ISO-8601 creation time (absent on seeded products)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Product {
    /// Products with nothing on hand are hidden from the sales catalog
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

/// Update product payload
///
/// Every field is optional; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

/// Stock replenishment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockRequest {
    pub product_id: i64,
    /// Units to add (absent or 0 means 1)
    pub quantity: Option<i64>,
}

impl RestockRequest {
    pub fn effective_quantity(&self) -> i64 {
        match self.quantity {
            None | Some(0) => 1,
            Some(q) => q,
        }
    }
}
