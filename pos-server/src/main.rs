use pos_server::{Server, ServerError, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    // 打印横幅
    print_banner();

    tracing::info!("POS server starting...");

    // 2. 初始化服务器状态 (存储后端 + 初始数据)
    let state = ServerState::initialize(&config)
        .await
        .map_err(ServerError::Storage)?;

    // 3. 启动 HTTP 服务器
    let server = Server::new(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
