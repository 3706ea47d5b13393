//! Thaam Server - Storefront API.
//!
//! This binary serves the storefront HTTP/JSON API on port 4000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request/response bodies
//! - MongoDB for products and user accounts (two collections)
//! - HS256 JWT identity tokens carried in the `auth-token` header
//! - Uploaded images stored on local disk and served at `/images`
//!
//! The database handle is constructed here and injected through
//! [`state::AppState`]; handlers never touch global state.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod error;
mod middleware;
mod models;
mod routes;
mod services;
mod state;

use config::ServerConfig;
use db::Db;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "thaam_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to MongoDB
    let db = Db::connect(&config.mongo_connection_string)
        .await
        .expect("Failed to connect to database");
    tracing::info!("database connection established");

    // The upload directory must exist before the first upload or ServeDir hit
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .expect("Failed to create upload directory");

    // Build application state
    let state = AppState::new(config, db);

    // Build router
    let app = Router::new()
        .merge(routes::routes())
        .nest_service("/images", ServeDir::new(state.config().upload_dir.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    // Start server
    let addr = state.config().socket_addr();
    tracing::info!("server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
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
