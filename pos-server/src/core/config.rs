use std::path::PathBuf;
use std::str::FromStr;

use crate::services::dashboard::DEFAULT_LOW_STOCK_THRESHOLD;

/// Bypass key accepted when `DEV_BYPASS_KEY` is unset
pub const DEFAULT_DEV_BYPASS_KEY: &str = "dev";

/// 存储后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    /// 每个集合一个 JSON 文件
    #[default]
    Json,
    /// 嵌入式 redb 数据库
    Redb,
    /// 内存 (进程退出即丢失)
    Memory,
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" | "file" => Ok(StorageKind::Json),
            "redb" => Ok(StorageKind::Redb),
            "memory" | "mem" => Ok(StorageKind::Memory),
            other => Err(format!("unknown storage backend: {other}")),
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR / DATA_DIR | ./data | 数据目录 |
/// | HTTP_PORT / PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | STORAGE_BACKEND | json | json / redb / memory |
/// | DEV_BYPASS_KEY | dev (空值表示禁用) | 开发登录码 |
/// | LOW_STOCK_THRESHOLD | 10 | 低库存阈值 |
/// | SALES_PAGE_DEFAULT | 20 | 销售列表默认条数 |
/// | SEED_DEMO_DATA | true | 首次启动写入演示数据 |
/// | LOG_LEVEL / LOG_JSON / LOG_DIR | info / false / - | 日志 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/pos STORAGE_BACKEND=redb HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 数据目录，存放集合文件或 redb 数据库
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    pub storage: StorageKind,
    /// 开发登录码，`None` 表示禁用
    pub dev_bypass_key: Option<String>,
    pub low_stock_threshold: i64,
    /// `GET /api/sales` 未指定 limit 时的条数
    pub sales_page_default: usize,
    pub seed_demo_data: bool,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置或无法解析的变量使用默认值
    pub fn from_env() -> Self {
        let environment = env_string("ENVIRONMENT").unwrap_or_else(|| "development".into());

        Self {
            work_dir: env_string("WORK_DIR")
                .or_else(|| env_string("DATA_DIR"))
                .unwrap_or_else(|| "./data".into()),
            http_port: env_parse("HTTP_PORT")
                .or_else(|| env_parse("PORT"))
                .unwrap_or(3000),
            storage: env_parse("STORAGE_BACKEND").unwrap_or_default(),
            dev_bypass_key: bypass_key_from(std::env::var("DEV_BYPASS_KEY").ok()),
            low_stock_threshold: env_parse("LOW_STOCK_THRESHOLD")
                .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD),
            sales_page_default: env_parse("SALES_PAGE_DEFAULT")
                .filter(|n: &usize| *n > 0)
                .unwrap_or(20),
            seed_demo_data: env_parse("SEED_DEMO_DATA").unwrap_or(true),
            log_level: env_string("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: env_parse("LOG_JSON").unwrap_or(false),
            log_dir: env_string("LOG_DIR"),
            environment,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir)
    }

    /// redb 数据库文件路径
    pub fn redb_path(&self) -> PathBuf {
        self.data_dir().join("pos.redb")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// 开发登录码: 未设置时为 `dev` (与运行环境无关)，显式空值禁用
fn bypass_key_from(raw: Option<String>) -> Option<String> {
    match raw {
        None => Some(DEFAULT_DEV_BYPASS_KEY.into()),
        Some(key) if key.trim().is_empty() => None,
        Some(key) => Some(key),
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env_string(key).and_then(|v| v.trim().parse().ok())
}
