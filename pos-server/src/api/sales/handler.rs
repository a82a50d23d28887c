//! Sale API Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use shared::client::SalesQuery;
use shared::models::{Receipt, Sale, SaleRequest};

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/sale - 登记销售
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<SaleRequest>,
) -> AppResult<(StatusCode, Json<Receipt>)> {
    let receipt = state.sales.register(payload).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /api/sales - 按登记顺序返回前 N 条
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<SalesQuery>,
) -> Json<Vec<Sale>> {
    let limit = query.limit_or(state.config.sales_page_default);
    Json(state.sales.list(limit).await)
}
