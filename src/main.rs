use anyhow::Context;
use email_manager::config::ServerConfig;
use email_manager::database::sqlite::{connect, SqliteRepository};
use email_manager::features;
use email_manager::logging::init_tracing;
use email_manager::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();
    init_tracing();

    // read once, held for the life of the process
    let config = ServerConfig::from_env()?;

    let pool = connect(&config.database_url, config.max_connections).await?;
    tracing::info!(database_url = %config.database_url, "database ready");

    let state = AppState::new(Arc::new(SqliteRepository::new(pool)));
    let app = features::app(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("server listening on http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
