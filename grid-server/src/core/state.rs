use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use mesa_client::StoreClient;

use crate::core::{Config, Result};
use crate::store::AppointmentsStore;

/// 服务器状态 - shared by every request handler
///
/// Cheap to clone; the store sits behind an `Arc`.
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | store | 预订存储 (HTTP 或内存) |
/// | fixed_now | 固定时钟，测试用 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<dyn AppointmentsStore>,
    fixed_now: Option<NaiveDateTime>,
}

impl ServerState {
    /// 初始化服务器状态，连接 HTTP 存储
    pub fn initialize(config: &Config) -> Result<Self> {
        let client = StoreClient::new(&config.client_config())?;
        tracing::info!(store = %client.base_url(), "Appointments store client ready");
        Ok(Self::with_store(config.clone(), Arc::new(client)))
    }

    /// 使用自定义存储 (测试 / 演示)
    pub fn with_store(config: Config, store: Arc<dyn AppointmentsStore>) -> Self {
        Self {
            config,
            store,
            fixed_now: None,
        }
    }

    /// Pin the clock used for "today" and the now indicator
    pub fn with_fixed_now(mut self, now: NaiveDateTime) -> Self {
        self.fixed_now = Some(now);
        self
    }

    /// Restaurant-local wall-clock time
    pub fn now(&self) -> NaiveDateTime {
        self.fixed_now.unwrap_or_else(|| Local::now().naive_local())
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("fixed_now", &self.fixed_now)
            .finish_non_exhaustive()
    }
}
