//! stac-proxy: an HTTP API over satellite imagery catalogs
//!
//! This is the main entry point for the application.

use anyhow::Result;
use stac_proxy::{
    catalogs::CatalogLoader,
    collections::CollectionRegistry,
    config,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = config::load()?;

    // Initialize logging
    let default_level = if settings.general.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting stac-proxy v{}", stac_proxy::VERSION);
    match settings.source {
        Some(ref path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Build registries
    let collections = CollectionRegistry::new(settings.collections.clone());
    info!(
        "Registered {} collections: {}",
        collections.len(),
        collections.names().join(", ")
    );
    let catalogs = CatalogLoader::load_and_check(&settings);
    info!("Loaded {} catalogs", catalogs.len());

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state and router
    let state = AppState::new(settings, collections, catalogs, client);
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
