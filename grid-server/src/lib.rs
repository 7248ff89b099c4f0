//! Mesa Grid Server - 餐厅预订表格服务
//!
//! # 架构概述
//!
//! Renders the back-office day view: tables as columns, 15-minute slots from
//! 12:00 to 24:00 as rows, reservations as blocks spanning the slots they
//! occupy. Reservation data is owned by the appointments store and read
//! through [`store::AppointmentsStore`].
//!
//! # 模块结构
//!
//! ```text
//! grid-server/src/
//! ├── core/     # 配置、状态、服务器
//! ├── grid/     # 布局引擎 (纯函数)
//! ├── store/    # 存储抽象 (HTTP / 内存)
//! ├── api/      # HTTP 路由和处理器
//! └── utils/    # 日志、参数解析
//! ```

pub mod api;
pub mod core;
pub mod grid;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use store::{AppointmentsStore, InMemoryStore};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    __  ___
   /  |/  /__  _________ _
  / /|_/ / _ \/ ___/ __ `/
 / /  / /  __(__  ) /_/ /
/_/  /_/\___/____/\__,_/   grid
    "#
    );
}
