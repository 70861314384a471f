use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::StatsResponseDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get aggregated census statistics.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    let stats = DashboardService::new(&state.db).stats().await?;

    Ok((
        StatusCode::OK,
        Json(StatsResponseDto {
            success: true,
            stats: stats.into_dto(),
        }),
    ))
}
