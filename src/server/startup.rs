use argon2::PasswordHash;
use sea_orm::DatabaseConnection;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, SessionManagerLayer, SessionStore,
};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::AdminCredentials,
};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "sensus=info,tower_http=info";

/// Name of the signed session cookie.
pub const SESSION_COOKIE_NAME: &str = "auth-token";

/// Minimum `SESSION_SECRET` length accepted as cookie signing key material.
const MIN_SESSION_SECRET_BYTES: usize = 64;

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, otherwise logs this crate and HTTP traces at info.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session store in the application database and migrates its table.
///
/// # Returns
/// - `Ok(SqliteStore)` - Store sharing the database connection pool
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session_store(db: &DatabaseConnection) -> Result<SqliteStore, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());

    store.migrate().await?;

    Ok(store)
}

/// Builds the session layer issuing the signed `auth-token` cookie.
///
/// The cookie is HttpOnly and SameSite=Strict, marked Secure when `secure` is set, and
/// expires after 24 hours without activity.
pub fn session_layer<S: SessionStore>(
    store: S,
    key: Key,
    secure: bool,
) -> SessionManagerLayer<S, SignedCookie> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_http_only(true)
        .with_same_site(SameSite::Strict)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(24)))
        .with_signed(key)
}

/// Derives the cookie signing key from `SESSION_SECRET`.
///
/// # Returns
/// - `Ok(Key)` - Signing key
/// - `Err(ConfigError::InvalidSessionSecret)` - Secret shorter than 64 bytes
pub fn session_key(config: &Config) -> Result<Key, AppError> {
    let secret = config.session_secret.as_bytes();

    if secret.len() < MIN_SESSION_SECRET_BYTES {
        return Err(ConfigError::InvalidSessionSecret(format!(
            "must be at least {} bytes, got {}",
            MIN_SESSION_SECRET_BYTES,
            secret.len()
        ))
        .into());
    }

    Key::try_from(secret)
        .map_err(|e| ConfigError::InvalidSessionSecret(e.to_string()).into())
}

/// Loads the administrator credential, rejecting a hash that cannot be verified against.
///
/// # Returns
/// - `Ok(AdminCredentials)` - Username and validated PHC hash string
/// - `Err(ConfigError::InvalidPasswordHash)` - `ADMIN_PASSWORD_HASH` is not a PHC string
pub fn admin_credentials(config: &Config) -> Result<AdminCredentials, AppError> {
    PasswordHash::new(&config.admin_password_hash)
        .map_err(|e| ConfigError::InvalidPasswordHash(e.to_string()))?;

    Ok(AdminCredentials {
        username: config.admin_username.clone(),
        password_hash: config.admin_password_hash.clone(),
    })
}
