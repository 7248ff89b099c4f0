use mesa_client::ClientConfig;

/// 服务器配置 - grid server settings
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | STORE_BASE_URL | http://localhost:8080/api | 预订存储服务地址 |
/// | STORE_API_KEY | (unset) | 存储服务 Bearer token |
/// | STORE_TIMEOUT_SECS | 10 | 存储请求超时(秒) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false (production: true) | JSON 日志 |
/// | LOG_DIR | (unset) | 日志目录，未设置时仅输出到控制台 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// STORE_BASE_URL=http://store.local/api HTTP_PORT=8080 cargo run -p grid-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// Appointments store REST base URL
    pub store_base_url: String,
    pub store_api_key: Option<String>,
    /// 存储请求超时 (秒)
    pub store_timeout_secs: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            store_base_url: std::env::var("STORE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".into()),
            store_api_key: std::env::var("STORE_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            store_timeout_secs: std::env::var("STORE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(is_production),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            environment,
        }
    }

    /// Store client settings derived from this config
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.store_base_url.clone()).with_timeout(self.store_timeout_secs);
        match &self.store_api_key {
            Some(key) => config.with_api_key(key.clone()),
            None => config,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_carries_store_settings() {
        let config = Config {
            http_port: 3000,
            store_base_url: "http://store:9000/api/".into(),
            store_api_key: Some("secret".into()),
            store_timeout_secs: 3,
            log_level: "debug".into(),
            log_json: false,
            log_dir: None,
            environment: "production".into(),
        };
        let client = config.client_config();
        assert_eq!(client.base_url, "http://store:9000/api/");
        assert_eq!(client.api_key.as_deref(), Some("secret"));
        assert_eq!(client.timeout, 3);
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
