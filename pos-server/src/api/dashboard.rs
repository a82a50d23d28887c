//! 看板路由

use axum::{Json, Router, extract::State, routing::get};
use shared::models::DashboardMetrics;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/dashboard", get(dashboard))
}

/// GET /api/dashboard
pub async fn dashboard(State(state): State<ServerState>) -> Json<DashboardMetrics> {
    Json(state.dashboard.snapshot().await)
}
