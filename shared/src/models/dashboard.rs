//! Dashboard Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate metrics derived from the sale and product collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Sales recorded on the current UTC date
    pub today_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub today_value: Decimal,
    /// Products below the low-stock threshold
    pub low_stock_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub all_time_value: Decimal,
    pub product_count: usize,
    pub status: String,
    pub updated_at: String,
}
