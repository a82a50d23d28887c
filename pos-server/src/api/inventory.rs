//! 补货路由

use axum::{Json, Router, extract::State, routing::post};
use shared::models::{Product, RestockRequest};

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/restock", post(restock))
}

/// POST /api/restock - 增加库存，返回更新后的商品
pub async fn restock(
    State(state): State<ServerState>,
    Json(req): Json<RestockRequest>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.restock(req).await?;
    Ok(Json(product))
}
