use chrono::Utc;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Guards endpoints that require a logged-in administrator.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires an unexpired administrator login.
    ///
    /// An expired login is cleared from the session before being rejected.
    ///
    /// # Returns
    /// - `Ok(String)` - Username of the logged-in administrator
    /// - `Err(AppError::AuthErr(_))` - No login, or the login has expired
    pub async fn require(&self) -> Result<String, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user) = auth_session.get_user().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        if user.is_expired_at(Utc::now()) {
            auth_session.clear().await;
            return Err(AuthError::SessionExpired(user.username).into());
        }

        Ok(user.username)
    }
}
