use std::net::SocketAddr;

use thiserror::Error;

use crate::store::StoreError;

/// 服务器启动/运行错误
///
/// 请求级错误走 `AppError`，这里只覆盖进程级失败。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("存储初始化失败: {0}")]
    Storage(#[from] StoreError),

    #[error("无法绑定 {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务异常: {0}")]
    Serve(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
