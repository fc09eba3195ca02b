//! Cartwheel server - single-store shopping-cart API.
//!
//! This binary serves the cart API on port 5000 (configurable via `PORT`).
//!
//! # Architecture
//!
//! - Axum web framework serving JSON endpoints
//! - In-memory catalog and cart stores (state is lost on restart)
//! - Permissive CORS: the demo UI is served from a different origin
//!
//! The catalog is seeded once at startup with the built-in demo products;
//! there is exactly one cart per process, with no per-user isolation.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use cartwheel_server::config::ServerConfig;
use cartwheel_server::routes;
use cartwheel_server::state::AppState;
use cartwheel_server::store::{CatalogStore, demo_catalog};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cartwheel_server=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Seed the catalog and build application state
    let catalog = CatalogStore::new(demo_catalog());
    tracing::info!(products = catalog.list().len(), "Catalog seeded");
    let state = AppState::new(config.clone(), catalog);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("cartwheel listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
