//! Sale Model
//!
//! Sales are immutable once recorded; there is no update or delete payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment method recorded when the request does not name one
pub const DEFAULT_PAYMENT_METHOD: &str = "cash";

/// Customer recorded when the request does not name one
pub const DEFAULT_CUSTOMER: &str = "generic";

/// Seller placeholder; sales carry no per-request attribution
pub const SYSTEM_SELLER: &str = "system";

/// One (product, quantity) pair of a sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: i64,
    /// Quantity as requested by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

impl LineItem {
    pub fn new(product_id: i64, quantity: i64) -> Self {
        Self {
            product_id,
            quantity: Some(quantity),
        }
    }

    /// Units to take out of stock; absent or non-positive quantities count as one
    pub fn effective_quantity(&self) -> i64 {
        match self.quantity {
            Some(q) if q > 0 => q,
            _ => 1,
        }
    }
}

/// Recorded sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    /// Caller-supplied total, never recomputed from line items
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub payment_method: String,
    pub line_items: Vec<LineItem>,
    pub customer: String,
    pub seller: String,
    /// ISO-8601 UTC time the server processed the sale
    pub timestamp: String,
}

/// Cart submitted to register a sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRequest {
    pub line_items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub payment_method: Option<String>,
    pub customer: Option<String>,
}

/// Receipt returned after a sale is recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub sale_id: i64,
    pub timestamp: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub item_count: usize,
}

impl Receipt {
    pub fn for_sale(sale: &Sale) -> Self {
        Self {
            sale_id: sale.id,
            timestamp: sale.timestamp.clone(),
            total: sale.total,
            item_count: sale.line_items.len(),
        }
    }
}
