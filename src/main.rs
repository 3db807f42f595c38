use chrono::Utc;
use dotenvy::dotenv;
use event_planner::{
    config::{database, server},
    core::session,
    errors::Result,
    web::{self, AppState},
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load server settings (config.toml is optional)
    let config = server::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?
        .server;

    // 4. Connect and make sure every table exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    let purged = session::delete_expired_sessions(&db, Utc::now()).await?;
    if purged > 0 {
        info!("Purged {} expired sessions", purged);
    }

    // 5. Serve
    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", config.bind_address, e))?;
    info!("Listening on http://{}", listener.local_addr()?);

    let app = web::router(AppState::new(db, Arc::new(config)));
    axum::serve(listener, app).await?;

    Ok(())
}
