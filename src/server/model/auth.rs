use crate::{
    model::auth::LoginDto,
    server::{error::AppError, util::parse::non_blank},
};

/// Message returned when the login form is incomplete.
pub const LOGIN_FIELDS_REQUIRED_MESSAGE: &str = "Username dan password harus diisi";

/// Submitted login credentials.
///
/// The username is trimmed; the password is kept exactly as submitted.
#[derive(Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        let username = non_blank(dto.username);
        let password = dto.password.filter(|p| !p.is_empty());

        match (username, password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(AppError::BadRequest(
                LOGIN_FIELDS_REQUIRED_MESSAGE.to_string(),
            )),
        }
    }
}
