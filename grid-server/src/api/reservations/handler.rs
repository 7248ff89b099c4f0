//! Reservation API Handlers

use axum::extract::{Path, Query, State};
use shared::models::ReservationAction;

use crate::core::ServerState;
use crate::grid::{ReservationDetail, build_detail};
use crate::utils::{ApiResponse, AppError, AppResult, ContextQuery, ErrorCode};

/// GET /api/reservations/{id} - 预订详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<ContextQuery>,
) -> AppResult<ApiResponse<ReservationDetail>> {
    let ctx = query.render_context()?;
    let (reservation, tables) = tokio::try_join!(
        state.store.get_reservation(id),
        state.store.list_tables()
    )?;
    Ok(ApiResponse::success(build_detail(&reservation, &tables, &ctx)))
}

/// POST /api/reservations/{id}/{seat|leave|no-show} - 更新服务状态
///
/// Role and phase are checked here; the store persists the transition.
/// Returns the re-fetched detail.
pub async fn apply_action(
    State(state): State<ServerState>,
    Path((id, action)): Path<(i64, String)>,
    Query(query): Query<ContextQuery>,
) -> AppResult<ApiResponse<ReservationDetail>> {
    let action: ReservationAction = action.parse().map_err(|e: String| {
        AppError::with_message(ErrorCode::InvalidRequest, e).with_detail("action", action.clone())
    })?;

    let ctx = query.render_context()?;
    if !ctx.role.can_update_reservations() {
        tracing::warn!(reservation_id = id, %action, role = ?ctx.role, "Reservation action denied for role");
        return Err(AppError::with_message(
            ErrorCode::RoleRequired,
            "Updating reservations requires staff, manager or admin role",
        )
        .with_detail("role", format!("{:?}", ctx.role).to_lowercase()));
    }

    let reservation = state.store.get_reservation(id).await?;
    let phase = reservation.phase();
    action.check(phase).map_err(|code| {
        AppError::new(code)
            .with_detail("reservation_id", id)
            .with_detail("action", action.path_segment())
    })?;

    state.store.apply_action(id, action).await?;
    tracing::info!(
        target: "audit",
        reservation_id = id,
        action = %action,
        role = ?ctx.role,
        from_phase = ?phase,
        "Reservation status updated"
    );

    let (reservation, tables) = tokio::try_join!(
        state.store.get_reservation(id),
        state.store.list_tables()
    )?;
    Ok(ApiResponse::success(build_detail(&reservation, &tables, &ctx)))
}
