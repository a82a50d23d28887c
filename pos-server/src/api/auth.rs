//! 登录路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/login | POST | 激活码登录 |

use axum::{Json, Router, extract::State, routing::post};
use shared::client::{LoginRequest, LoginResponse};

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/login", post(login))
}

/// POST /api/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state.auth.login(&req.activation_key).await?;
    Ok(Json(response))
}
