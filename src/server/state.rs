//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds the database pool and the administrator
//! credential that login requests are checked against.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// The single administrator account allowed to log in.
///
/// Loaded from configuration; the password is only ever held as an Argon2 hash.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<AdminCredentials>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Administrator credential used by the login endpoint.
    pub admin: Arc<AdminCredentials>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `admin` - Administrator credential loaded from configuration
    pub fn new(db: DatabaseConnection, admin: AdminCredentials) -> Self {
        Self {
            db,
            admin: Arc::new(admin),
        }
    }
}
