use thiserror::Error;

/// 服务器启动 / 运行错误
///
/// Request-level failures use [`shared::AppError`]; this type only covers
/// bringing the process up and keeping the listener alive.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("存储客户端初始化失败: {0}")]
    StoreClient(#[from] mesa_client::ClientError),

    #[error("端口绑定失败 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务错误: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
