//! Type-safe session management wrappers.
//!
//! The administrator's login state lives in a signed, server-side session. This module
//! keeps the session keys in one place and exposes typed accessors so controllers and
//! the auth guard never touch raw keys.

use chrono::{DateTime, Duration, TimeZone, Utc};
use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_EXPIRES_AT: &str = "auth:expires_at";

/// Lifetime of a login, counted from the moment the credentials were accepted.
pub const SESSION_TTL: Duration = Duration::hours(24);

/// Administrator stored in the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub username: String,
    /// Absolute time after which the login is no longer honored.
    pub expires_at: DateTime<Utc>,
}

impl SessionUser {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Authentication session management.
///
/// Handles the authenticated administrator's username and login expiry, and session
/// lifecycle operations around login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes a logged-in session for the given administrator.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused.
    ///
    /// # Arguments
    /// - `username` - Username of the authenticated administrator
    /// - `expires_at` - Absolute expiry of the login
    ///
    /// # Returns
    /// - `Ok(())` - Login state stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session
    pub async fn login(&self, username: &str, expires_at: DateTime<Utc>) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_USER, username.to_string())
            .await?;
        self.session
            .insert(SESSION_AUTH_EXPIRES_AT, expires_at.timestamp())
            .await?;
        Ok(())
    }

    /// Retrieves the administrator stored in the session, expired or not.
    ///
    /// # Returns
    /// - `Ok(Some(SessionUser))` - Session holds a username and expiry
    /// - `Ok(None)` - Nobody is logged in, or the stored expiry is unreadable
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<SessionUser>, AppError> {
        let Some(username) = self.session.get::<String>(SESSION_AUTH_USER).await? else {
            return Ok(None);
        };
        let Some(timestamp) = self.session.get::<i64>(SESSION_AUTH_EXPIRES_AT).await? else {
            return Ok(None);
        };
        let Some(expires_at) = Utc.timestamp_opt(timestamp, 0).single() else {
            return Ok(None);
        };

        Ok(Some(SessionUser {
            username,
            expires_at,
        }))
    }

    /// Checks whether an unexpired administrator login is present.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self
            .get_user()
            .await?
            .is_some_and(|user| !user.is_expired_at(Utc::now())))
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
