//! 销售登记 - 唯一同时修改两个集合的操作
//!
//! # 流程
//!
//! ```text
//! write_gate → load(products, sales) → next_id → build Sale
//!            → apply_stock_decrements → append → save_pair(sales, products)
//! ```
//!
//! 写入顺序固定为先销售后库存。JSON 文件后端下两次写入之间存在
//! 不一致窗口：库存写失败时销售已落盘而库存未扣减，调用方收到 500。
//! redb 后端在同一事务中提交两者。

use chrono::{DateTime, Utc};
use shared::models::{
    DEFAULT_CUSTOMER, DEFAULT_PAYMENT_METHOD, LineItem, Product, Receipt, SYSTEM_SELLER, Sale,
    SaleRequest,
};

use crate::store::{CollectionStore, next_id};
use crate::utils::{AppError, AppResult};
use crate::utils::time::to_iso;

/// Outcome of applying a sale's line items to the catalog
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StockAdjustment {
    /// Line items that matched a product
    pub applied: usize,
    /// Product ids referenced by the sale but absent from the catalog
    pub unknown_products: Vec<i64>,
    /// Products whose stock hit the zero floor
    pub clamped: Vec<i64>,
}

/// Decrement stock for every line item, clamping at zero
///
/// Items are applied in order; repeated product ids decrement repeatedly.
/// Unknown product ids are skipped.
pub fn apply_stock_decrements(products: &mut [Product], items: &[LineItem]) -> StockAdjustment {
    let mut adjustment = StockAdjustment::default();

    for item in items {
        let Some(product) = products.iter_mut().find(|p| p.id == item.product_id) else {
            adjustment.unknown_products.push(item.product_id);
            continue;
        };

        let wanted = item.effective_quantity();
        if wanted > product.stock {
            adjustment.clamped.push(product.id);
        }
        product.stock = product.stock.saturating_sub(wanted).max(0);
        adjustment.applied += 1;
    }

    adjustment
}

/// Build the sale record for a request
pub fn build_sale(id: i64, request: SaleRequest, at: DateTime<Utc>) -> Sale {
    Sale {
        id,
        total: request.total,
        payment_method: request
            .payment_method
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
        line_items: request.line_items,
        customer: request
            .customer
            .unwrap_or_else(|| DEFAULT_CUSTOMER.to_string()),
        seller: SYSTEM_SELLER.to_string(),
        timestamp: to_iso(at),
    }
}

#[derive(Clone, Debug)]
pub struct SaleService {
    store: CollectionStore,
}

impl SaleService {
    pub fn new(store: CollectionStore) -> Self {
        Self { store }
    }

    /// Record a sale and take its items out of stock
    pub async fn register(&self, request: SaleRequest) -> AppResult<Receipt> {
        let _gate = self.store.write_gate().await;

        let mut products: Vec<Product> = self.store.load().await;
        let mut sales: Vec<Sale> = self.store.load().await;

        let id = next_id(&sales).ok_or_else(|| AppError::validation("sale id space exhausted"))?;
        let sale = build_sale(id, request, Utc::now());
        let adjustment = apply_stock_decrements(&mut products, &sale.line_items);

        if !adjustment.unknown_products.is_empty() {
            tracing::warn!(
                sale_id = sale.id,
                unknown = ?adjustment.unknown_products,
                "Sale references unknown products, skipped"
            );
        }
        if !adjustment.clamped.is_empty() {
            tracing::warn!(
                sale_id = sale.id,
                products = ?adjustment.clamped,
                "Sold more than on hand, stock clamped at zero"
            );
        }

        let receipt = Receipt::for_sale(&sale);
        sales.push(sale);

        if let Err(e) = self.store.save_pair(&sales, &products).await {
            tracing::error!(
                sale_id = receipt.sale_id,
                error = %e,
                "Failed to persist sale"
            );
            return Err(e.into());
        }

        tracing::info!(
            sale_id = receipt.sale_id,
            total = %receipt.total,
            items = receipt.item_count,
            "Sale registered"
        );
        Ok(receipt)
    }

    /// First `limit` sales in insertion order
    pub async fn list(&self, limit: usize) -> Vec<Sale> {
        let sales: Vec<Sale> = self.store.load().await;
        sales.into_iter().take(limit).collect()
    }
}
