//! 工具模块
//!
//! - [`logger`] - 日志初始化与清理
//! - [`time`] - 日期参数解析
//! - [`context`] - 语言 / 角色参数

pub mod context;
pub mod logger;
pub mod time;

pub use context::ContextQuery;
pub use time::parse_date_or_today;

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
