//! Reservation detail / status action API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/reservations/{id} | GET | 预订详情 |
//! | /api/reservations/{id}/seat | POST | 标记入座 |
//! | /api/reservations/{id}/leave | POST | 标记离店 |
//! | /api/reservations/{id}/no-show | POST | 标记未到店 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/{action}", post(handler::apply_action))
}
