use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No administrator is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    NotAuthenticated,

    /// The session holds an administrator whose login has expired.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Session for user {0} has expired")]
    SessionExpired(String),

    /// Submitted username or password did not match the administrator credential.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid credentials submitted for user {0}")]
    InvalidCredentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` / `SessionExpired` → 401 with "Unauthorized"
/// - `InvalidCredentials` → 401 with "Username atau password salah!"
///
/// Errors are logged at debug level; client-facing messages stay fixed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::NotAuthenticated | Self::SessionExpired(_) => "Unauthorized",
            Self::InvalidCredentials(_) => "Username atau password salah!",
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(message))).into_response()
    }
}
