use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        completion::CompletionFormDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        model::completion::CompleteSurveyParams, service::completion::SurveyCompletionService,
        state::AppState,
    },
};

/// Tag for grouping final-step endpoints in OpenAPI documentation
pub static COMPLETION_TAG: &str = "final";

/// Submit the final form, recording enumerator and respondent.
///
/// Submitting again for the same family overwrites the earlier record.
#[utoipa::path(
    post,
    path = "/api/final/submit",
    tag = COMPLETION_TAG,
    request_body = CompletionFormDto,
    responses(
        (status = 200, description = "Survey completed", body = MessageDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Family not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_final(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CompletionFormDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;
    let Json(payload) = payload?;

    let params = CompleteSurveyParams::from_dto(payload)?;
    SurveyCompletionService::new(&state.db)
        .submit(params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok("Semua data berhasil disimpan. Terima kasih!")),
    ))
}
