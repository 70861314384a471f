use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        member::{MemberFormDto, MemberSubmitResponseDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::member::AppendMemberParams,
        service::member::MemberService, state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Submit the form of the next household member aged 15 or older.
///
/// While declared adults remain the client is told to continue with the next member;
/// after the last one it is pointed at the final form.
///
/// # Returns
/// - `200 OK` - Member stored
/// - `400 Bad Request` - Missing or invalid field, or every declared adult recorded
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown family
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/members/submit",
    tag = MEMBER_TAG,
    request_body = MemberFormDto,
    responses(
        (status = 200, description = "Member stored", body = MemberSubmitResponseDto),
        (status = 400, description = "Invalid member data or limit reached", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Family not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_member(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<MemberFormDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;
    let Json(payload) = payload?;

    let params = AppendMemberParams::from_dto(payload)?;
    let keluarga_id = params.keluarga_id.clone();
    let appended = MemberService::new(&state.db).append(params).await?;

    let response = appended.into_response_dto(&keluarga_id);

    Ok((StatusCode::OK, Json(response)))
}
