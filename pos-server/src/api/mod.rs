//! API 路由模块
//!
//! 所有路由挂载在 `/api` 下。
//!
//! # 结构
//!
//! - [`status`] - 系统状态
//! - [`products`] - 商品管理接口
//! - [`sales`] - 销售登记与查询
//! - [`dashboard`] - 看板统计
//! - [`auth`] - 激活码登录
//! - [`inventory`] - 补货

pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod middleware;
pub mod products;
pub mod sales;
pub mod status;

use axum::Router;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;

/// Every route served, for the startup log
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/api/status"),
    ("GET", "/api/products"),
    ("POST", "/api/products"),
    ("GET", "/api/products/{id}"),
    ("PUT", "/api/products/{id}"),
    ("DELETE", "/api/products/{id}"),
    ("POST", "/api/sale"),
    ("GET", "/api/sales"),
    ("GET", "/api/dashboard"),
    ("POST", "/api/login"),
    ("POST", "/api/restock"),
];

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(status::router())
        .merge(auth::router())
        .merge(products::router())
        .merge(sales::router())
        .merge(inventory::router())
        .merge(dashboard::router())
}

/// Build the full application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        // Request logging - outermost, executed first
        .layer(axum::middleware::from_fn(middleware::log_request))
        .with_state(state)
}
