use grid_server::{Config, Server, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env
    let _ = dotenvy::dotenv();

    // 2. 加载配置 + 日志
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    print_banner();
    tracing::info!(environment = %config.environment, "🦀 Mesa grid server starting...");

    // 3. 启动 HTTP 服务器 (初始化存储客户端)
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
