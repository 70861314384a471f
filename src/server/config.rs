use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

pub struct Config {
    pub database_url: String,

    pub admin_username: String,
    /// Argon2 PHC string, e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`
    pub admin_password_hash: String,

    /// Key material for signing the session cookie, at least 64 bytes.
    pub session_secret: String,
    pub cookie_secure: bool,

    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            admin_username: required_var("ADMIN_USERNAME")?,
            admin_password_hash: required_var("ADMIN_PASSWORD_HASH")?,
            session_secret: required_var("SESSION_SECRET")?,
            cookie_secure: std::env::var("COOKIE_SECURE")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
