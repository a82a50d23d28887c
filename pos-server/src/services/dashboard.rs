//! Dashboard aggregation

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{DashboardMetrics, Product, Sale};

use crate::store::CollectionStore;
use crate::utils::time::{date_portion, format_date, to_iso};

/// Products below this many units count as low stock
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

const STATUS_ONLINE: &str = "online";

/// Summarise the sale log and catalog as of `now`
///
/// A sale is "today" when the date part of its timestamp equals the UTC
/// date of `now`. Totals come from clients unchecked, so sums saturate at
/// the `Decimal` bounds.
pub fn aggregate(
    sales: &[Sale],
    products: &[Product],
    now: DateTime<Utc>,
    low_stock_threshold: i64,
) -> DashboardMetrics {
    let today = format_date(now.date_naive());

    let (today_count, today_value) = sales
        .iter()
        .filter(|s| date_portion(&s.timestamp) == today)
        .fold((0usize, Decimal::ZERO), |(count, value), s| {
            (count + 1, value.saturating_add(s.total))
        });

    DashboardMetrics {
        today_count,
        today_value,
        low_stock_count: products
            .iter()
            .filter(|p| p.stock < low_stock_threshold)
            .count(),
        all_time_value: sales
            .iter()
            .fold(Decimal::ZERO, |value, s| value.saturating_add(s.total)),
        product_count: products.len(),
        status: STATUS_ONLINE.to_string(),
        updated_at: to_iso(now),
    }
}

#[derive(Clone, Debug)]
pub struct DashboardService {
    store: CollectionStore,
    low_stock_threshold: i64,
}

impl DashboardService {
    pub fn new(store: CollectionStore, low_stock_threshold: i64) -> Self {
        Self {
            store,
            low_stock_threshold,
        }
    }

    pub async fn snapshot(&self) -> DashboardMetrics {
        let sales: Vec<Sale> = self.store.load().await;
        let products: Vec<Product> = self.store.load().await;
        aggregate(&sales, &products, Utc::now(), self.low_stock_threshold)
    }
}
