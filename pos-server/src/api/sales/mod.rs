//! Sale API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/sale | POST | 登记销售并扣减库存 |
//! | /api/sales | GET | 销售记录 (`?limit=N`) |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/sale", post(handler::register))
        .route("/api/sales", get(handler::list))
}
