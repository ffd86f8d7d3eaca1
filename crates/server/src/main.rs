use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;

use mirage_core::{
    load_config, validate_config, ArrParseClient, DmmSearchClient, ParseClient, ReleaseGenerator,
    ReleaseMatcher, SearchClient,
};
use mirage_server::{api::create_router, logging, state::AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Logging may not be initialized yet
        eprintln!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Determine config path
    let config_path = std::env::var("MIRAGE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    // Initialize logging; the guard flushes the log file on drop
    let _log_guard = logging::init(&config.logging);

    info!("Configuration loaded from {:?}", config_path);
    info!("Movie parser: {}", config.parser.movie.url);
    info!("Episode parser: {}", config.parser.episode.url);
    info!("Search index: {}", config.search.url);

    let parser: Arc<dyn ParseClient> = Arc::new(
        ArrParseClient::new(config.parser.clone()).context("Failed to create parse client")?,
    );
    let searcher: Arc<dyn SearchClient> = Arc::new(
        DmmSearchClient::new(config.search.clone()).context("Failed to create search client")?,
    );
    let matcher = ReleaseMatcher::with_config(&config.matcher);
    info!("Match threshold: {}", matcher.threshold());

    let generator = ReleaseGenerator::new(parser, searcher, matcher);

    // Create app state
    let addr = SocketAddr::new(config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config, generator));

    // Create router
    let app = create_router(state);

    // Start server
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
