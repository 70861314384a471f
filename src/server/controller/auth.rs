use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AuthStatusDto, LoginDto, LoginResponseDto},
    },
    server::{
        error::AppError,
        middleware::session::{AuthSession, SESSION_TTL},
        model::auth::LoginParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in as the administrator.
///
/// Verifies the submitted credentials and, on success, starts a fresh session that
/// stays valid for 24 hours.
///
/// # Returns
/// - `200 OK` - Logged in, with the dashboard redirect
/// - `400 Bad Request` - Username or password missing, or malformed body
/// - `401 Unauthorized` - Credentials do not match
/// - `500 Internal Server Error` - Session store error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = LoginParams::from_dto(payload)?;

    let username = match AuthService::new(&state.admin).verify_credentials(&params) {
        Ok(username) => username,
        Err(err) => {
            tracing::warn!("Rejected login for user {}", params.username);
            return Err(err);
        }
    };

    AuthSession::new(&session)
        .login(&username, Utc::now() + SESSION_TTL)
        .await?;

    tracing::info!("Administrator {} logged in", username);

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            success: true,
            message: "Login berhasil".to_string(),
            redirect_url: Some("/dashboard".to_string()),
        }),
    ))
}

/// Report whether the caller holds a valid administrator session.
///
/// Never fails for unauthenticated callers; they receive `authenticated: false`.
#[utoipa::path(
    get,
    path = "/api/auth/check",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authentication status", body = AuthStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check(session: Session) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthSession::new(&session).is_authenticated().await?;

    Ok((StatusCode::OK, Json(AuthStatusDto { authenticated })))
}

/// Log out by clearing the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(MessageDto::ok("Logout berhasil"))))
}
