//! Shared types for the Mesa back office
//!
//! Entity models consumed from the appointments store, the explicit render
//! context (language + role), and the unified error / response types used by
//! both `grid-server` and `mesa-client`.

pub mod context;
pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use context::{Language, RenderContext, UserRole};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
