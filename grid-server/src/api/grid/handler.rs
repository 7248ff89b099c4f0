//! Reservation grid API Handlers

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::core::ServerState;
use crate::grid::{self, DaySummary, GridInput, GridView};
use crate::utils::{ApiResponse, AppResult, ContextQuery, parse_date_or_today};

#[derive(Debug, Deserialize)]
pub struct GridQuery {
    /// YYYY-MM-DD, defaults to today
    pub date: Option<String>,
    #[serde(flatten)]
    pub context: ContextQuery,
}

/// GET /api/grid - 当日预订表格
pub async fn day_grid(
    State(state): State<ServerState>,
    Query(query): Query<GridQuery>,
) -> AppResult<ApiResponse<GridView>> {
    let ctx = query.context.render_context()?;
    let now = state.now();
    let date = parse_date_or_today(query.date.as_deref(), now)?;

    let (tables, reservations) = tokio::try_join!(
        state.store.list_tables(),
        state.store.list_reservations(date)
    )?;

    let view = grid::render(
        GridInput {
            date,
            tables,
            reservations,
            now,
        },
        &ctx,
    );
    Ok(ApiResponse::success(view))
}

/// GET /api/grid/summary - 当日统计
pub async fn day_summary(
    State(state): State<ServerState>,
    Query(query): Query<GridQuery>,
) -> AppResult<ApiResponse<DaySummary>> {
    let date = parse_date_or_today(query.date.as_deref(), state.now())?;

    let (tables, reservations) = tokio::try_join!(
        state.store.list_tables(),
        state.store.list_reservations(date)
    )?;

    Ok(ApiResponse::success(grid::summarize(date, &tables, &reservations)))
}
