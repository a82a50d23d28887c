//! POS Server - 小型零售收银后端
//!
//! # 架构概述
//!
//! - **集合存储** (`store`): products / sales / users 三个集合整体读写，
//!   可选 JSON 文件、redb 或内存后端
//! - **业务服务** (`services`): 商品、销售登记、看板、登录
//! - **HTTP API** (`api`): `/api` 下的 JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── store/         # 集合存储、后端、ID 分配、初始数据
//! ├── services/      # 商品、销售、看板、登录
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、时间、校验
//! ```

pub mod api;
pub mod core;
pub mod services;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState, StorageKind};
pub use store::{CollectionStore, StorageBackend, StoreError};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 加载 `.env` 并读取配置，初始化日志
pub fn setup_environment() -> Config {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    if dotenv_loaded {
        tracing::debug!("Loaded .env file");
    }
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____  ____  _____
   / __ \/ __ \/ ___/
  / /_/ / / / /\__ \
 / ____/ /_/ /___/ /
/_/    \____//____/
    "#
    );
}
