//! Administrator credential verification.

use argon2::{Argon2, PasswordHash, PasswordVerifier};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::LoginParams,
    state::AdminCredentials,
};

pub struct AuthService<'a> {
    admin: &'a AdminCredentials,
}

impl<'a> AuthService<'a> {
    pub fn new(admin: &'a AdminCredentials) -> Self {
        Self { admin }
    }

    /// Checks submitted credentials against the configured administrator.
    ///
    /// The password hash is verified even when the username does not match, so a wrong
    /// username costs the same as a wrong password.
    ///
    /// # Returns
    /// - `Ok(String)` - Username of the authenticated administrator
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Username or password mismatch
    /// - `Err(AppError::InternalError)` - Configured hash could not be parsed
    pub fn verify_credentials(&self, params: &LoginParams) -> Result<String, AppError> {
        let hash = PasswordHash::new(&self.admin.password_hash).map_err(|e| {
            AppError::InternalError(format!("Invalid administrator password hash: {}", e))
        })?;

        let password_ok = Argon2::default()
            .verify_password(params.password.as_bytes(), &hash)
            .is_ok();
        let username_ok = params.username == self.admin.username;

        if password_ok && username_ok {
            Ok(self.admin.username.clone())
        } else {
            Err(AuthError::InvalidCredentials(params.username.clone()).into())
        }
    }
}
