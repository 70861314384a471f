//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` for
//! automatic error handling in API endpoints. Every error body has the shape
//! `{"success": false, "message": "..."}`.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Generic message returned for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Terjadi kesalahan server";

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion. Domain-specific errors
/// like `AuthError` handle their own response mapping, while generic variants provide
/// standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for its 401 responses.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised by the session store migration.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body was not valid JSON for the endpoint.
    ///
    /// Results in 400 Bad Request with a generic format message.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Query string could not be parsed.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided, field-specific message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and rejected request bodies or queries
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new("Format data tidak valid")),
                )
                    .into_response()
            }
            Self::QueryRejection(rejection) => {
                tracing::debug!("Rejected query string: {}", rejection.body_text());
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new("Parameter tidak valid")),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new(INTERNAL_ERROR_MESSAGE)),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(INTERNAL_ERROR_MESSAGE)),
        )
            .into_response()
    }
}
