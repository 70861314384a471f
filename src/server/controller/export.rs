use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        export::{ExportQuery, ExportResponseDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::export::AreaFilter,
        service::export::ExportService, state::AppState,
    },
};

/// Tag for grouping export endpoints in OpenAPI documentation
pub static EXPORT_TAG: &str = "export";

/// Export raw family and member rows, optionally filtered by area.
///
/// The client assembles the spreadsheet from these rows. `filterOptions` always lists
/// every area so the filter form can be populated regardless of the current filter.
#[utoipa::path(
    get,
    path = "/api/export/excel",
    tag = EXPORT_TAG,
    params(ExportQuery),
    responses(
        (status = 200, description = "Export rows", body = ExportResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_excel(
    State(state): State<AppState>,
    session: Session,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;
    let Query(query) = query?;

    let data = ExportService::new(&state.db)
        .export(AreaFilter::from_query(query))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ExportResponseDto {
            success: true,
            data: data.into_dto(),
        }),
    ))
}
