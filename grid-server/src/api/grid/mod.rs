//! Reservation grid API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/grid", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::day_grid))
        .route("/summary", get(handler::day_summary))
}
