use std::sync::Arc;

use academics_server::api::{AppState, create_router};
use academics_server::config::{DEFAULT_CONFIG_PATH, ServerConfig};
use academics_server::db::init_pool_and_migrate;
use academics_server::session::SessionStore;
use academics_server::shutdown;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    info!("starting academics server");
    let config = ServerConfig::load(DEFAULT_CONFIG_PATH)
        .with_context(|| format!("failed to load server config from {DEFAULT_CONFIG_PATH}"))?;

    let db = init_pool_and_migrate(&config.database_url).await?;
    let state = Arc::new(AppState::new(db, SessionStore::new(config.session_ttl())));
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "server is ready, press Ctrl+C to shut down");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for(tokio::signal::ctrl_c()))
        .await
        .context("server error")?;

    info!("server shutdown complete");
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
