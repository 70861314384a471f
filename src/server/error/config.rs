use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `SESSION_SECRET` cannot be used as a cookie signing key.
    #[error("Invalid SESSION_SECRET: {0}")]
    InvalidSessionSecret(String),

    /// `ADMIN_PASSWORD_HASH` is not a valid PHC password hash string.
    #[error("Invalid ADMIN_PASSWORD_HASH: {0}")]
    InvalidPasswordHash(String),
}
