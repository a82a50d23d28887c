//! 业务服务层
//!
//! - [`CatalogService`] - 商品 CRUD 与补货
//! - [`SaleService`] - 销售登记 (扣减库存)
//! - [`DashboardService`] - 看板统计
//! - [`AuthService`] - 激活码登录

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod sales;

pub use auth::AuthService;
pub use catalog::CatalogService;
pub use dashboard::DashboardService;
pub use sales::SaleService;
