use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        family::{
            FamilyFormDto, FamilyIdDto, FamilyIdQuery, FamilyInfoResponseDto,
            FamilyListResponseDto, FamilySubmitResponseDto, FamilyUpdateResponseDto,
            UpdateFamilyDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::family::{FamilyFields, FamilyWithProgress, UpdateFamilyParams},
        service::family::{next_step_url, submit_message, FamilyService},
        state::AppState,
        util::parse::required_family_id,
    },
};

/// Tag for grouping family endpoints in OpenAPI documentation
pub static FAMILY_TAG: &str = "family";

/// Submit the family form.
///
/// Creates the family under a generated id and points the client at the next step:
/// the member form when adults were declared, otherwise the final form.
///
/// # Access Control
/// Requires a logged-in administrator
///
/// # Returns
/// - `200 OK` - Family created
/// - `400 Bad Request` - Missing field or counts out of bounds
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/family/submit",
    tag = FAMILY_TAG,
    request_body = FamilyFormDto,
    responses(
        (status = 200, description = "Family created", body = FamilySubmitResponseDto),
        (status = 400, description = "Invalid family data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_family(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<FamilyFormDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;
    let Json(payload) = payload?;

    let fields = FamilyFields::from_dto(payload)?;
    let family = FamilyService::new(&state.db).create(fields).await?;

    Ok((
        StatusCode::OK,
        Json(FamilySubmitResponseDto {
            success: true,
            message: submit_message(&family).to_string(),
            redirect_url: next_step_url(&family),
            keluarga_id: family.keluarga_id,
        }),
    ))
}

/// List every family with its data-entry progress, newest first.
#[utoipa::path(
    get,
    path = "/api/family/submit",
    tag = FAMILY_TAG,
    responses(
        (status = 200, description = "All families", body = FamilyListResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_families(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    let families = FamilyService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(FamilyListResponseDto {
            success: true,
            data: families
                .into_iter()
                .map(FamilyWithProgress::into_dto)
                .collect(),
        }),
    ))
}

/// Get a family with its members and completion record.
///
/// # Returns
/// - `200 OK` - Family found
/// - `400 Bad Request` - `family_id` missing
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown family
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/family/info",
    tag = FAMILY_TAG,
    params(FamilyIdQuery),
    responses(
        (status = 200, description = "Family detail", body = FamilyInfoResponseDto),
        (status = 400, description = "Family ID missing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Family not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_family_info(
    State(state): State<AppState>,
    session: Session,
    query: Result<Query<FamilyIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;
    let Query(query) = query?;

    let keluarga_id = required_family_id(query.family_id)?;
    let detail = FamilyService::new(&state.db)
        .get_detail(&keluarga_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FamilyInfoResponseDto {
            success: true,
            family: detail.into_dto(),
        }),
    ))
}

/// Update a family's form fields.
///
/// Uses the same validation as creation; additionally the adult count may not drop
/// below the members already recorded.
#[utoipa::path(
    put,
    path = "/api/family/update",
    tag = FAMILY_TAG,
    request_body = UpdateFamilyDto,
    responses(
        (status = 200, description = "Family updated", body = FamilyUpdateResponseDto),
        (status = 400, description = "Invalid family data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Family not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_family(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<UpdateFamilyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;
    let Json(payload) = payload?;

    let params = UpdateFamilyParams {
        keluarga_id: required_family_id(payload.family_id)?,
        fields: FamilyFields::from_dto(payload.form)?,
    };
    let family = FamilyService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(FamilyUpdateResponseDto {
            success: true,
            message: "Data keluarga berhasil diperbarui".to_string(),
            family: family.into_dto(),
        }),
    ))
}

/// Delete a family together with its members and completion record.
#[utoipa::path(
    delete,
    path = "/api/family/delete",
    tag = FAMILY_TAG,
    request_body = FamilyIdDto,
    responses(
        (status = 200, description = "Family deleted", body = MessageDto),
        (status = 400, description = "Family ID missing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Family not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_family(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<FamilyIdDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;
    let Json(payload) = payload?;

    let keluarga_id = required_family_id(payload.family_id)?;
    FamilyService::new(&state.db).delete(&keluarga_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok("Data keluarga berhasil dihapus")),
    ))
}
