//! 系统状态路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/status | GET | 服务在线检查 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ONLINE",
//!   "system": "POS Backend",
//!   "version": "0.1.0",
//!   "message": "Point-of-sale API is running",
//!   "time": "2024-05-01T12:00:00.000Z",
//!   "backend": "json"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::time::now_iso;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/status", get(status))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub system: String,
    pub version: String,
    pub message: String,
    pub time: String,
    /// Active storage backend (json | redb | memory)
    pub backend: String,
}

pub async fn status(State(state): State<ServerState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ONLINE".to_string(),
        system: "POS Backend".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Point-of-sale API is running".to_string(),
        time: now_iso(),
        backend: state.store.backend_kind().to_string(),
    })
}
