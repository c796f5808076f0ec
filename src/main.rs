//! Camera Inventory Server
//!
//! Loads the camera list from the remote API on startup and serves the
//! inventory view over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use camera_inventory::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("camera_inventory={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Camera Inventory v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Upstream: {:?}", config.upstream);

    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let services = Services::new(Repository::new(), &config)?;

    // Initial load; the view reports `loading` until it completes
    let view = services.view.clone();
    tokio::spawn(async move {
        if view.reload().await.is_err() {
            tracing::warn!("Initial camera load failed; retry with POST /api/v1/cameras/reload");
        }
    });

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let app = api::create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse()?, server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
