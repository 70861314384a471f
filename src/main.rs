mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let admin = startup::admin_credentials(&config)?;
    let session_key = startup::session_key(&config)?;

    let db = startup::connect_to_database(&config).await?;
    let session_store = startup::connect_to_session_store(&db).await?;

    let session_layer = startup::session_layer(session_store, session_key, config.cookie_secure);

    let app = router::router()
        .with_state(AppState::new(db, admin))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
