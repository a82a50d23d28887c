//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - tracing 日志初始化
//! - [`time`] - ISO-8601 时间戳
//! - [`validation`] - 输入校验

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCode};
