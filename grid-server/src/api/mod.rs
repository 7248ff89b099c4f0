//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`grid`] - 预订表格与当日统计
//! - [`reservations`] - 预订详情与状态操作

pub mod grid;
pub mod health;
pub mod reservations;

use axum::Router;
use http::HeaderName;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(grid::router())
        .merge(reservations::router())
}

/// Build the fully configured application
///
/// Used by both the HTTP server and in-process `oneshot` calls.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - dashboard is served from another origin
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER)))
        .with_state(state)
}
