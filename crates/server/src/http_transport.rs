//! HTTP transport for the recommendation service.
//!
//! Binds the routes from [`crate::handler`] to a TCP listener, wraps them in
//! a CORS layer for browser clients and shuts down cleanly on Ctrl-C or
//! SIGTERM.

use crate::handler::{router, AppState};
use crate::signals::shutdown_signal;
use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

/// Default bind address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Settings for the HTTP listener.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Socket address to bind (e.g., "127.0.0.1:8000").
    pub bind: String,
    /// Allowed CORS origins (empty = no CORS, `*` = any origin).
    pub cors_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

/// Builds CORS layer from allowed origins.
///
/// Invalid origins are logged as warnings and skipped. An empty result after
/// filtering invalid origins will disable CORS.
pub(crate) fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        // No CORS - server-to-server only
        CorsLayer::new()
    } else if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let mut valid_origins = Vec::with_capacity(origins.len());
        for origin in origins {
            match origin.parse::<HeaderValue>() {
                Ok(header) => valid_origins.push(header),
                Err(e) => {
                    tracing::warn!(
                        target: "learnavia::http::cors",
                        origin,
                        error = %e,
                        "Failed to parse CORS origin - it will be ignored. \
                         Browser requests from this origin will be rejected."
                    );
                }
            }
        }

        if valid_origins.is_empty() {
            tracing::warn!(
                target: "learnavia::http::cors",
                "All CORS origins failed to parse. CORS will be disabled."
            );
        }

        CorsLayer::new()
            .allow_origin(valid_origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    }
}

/// Builds the full application: routes plus CORS.
pub fn build_app(state: AppState, cors_origins: &[String]) -> axum::Router {
    router(state).layer(build_cors_layer(cors_origins))
}

/// Starts the recommendation service and runs until a shutdown signal.
pub async fn serve_http(state: AppState, config: HttpConfig) -> Result<()> {
    let addr: SocketAddr = config
        .bind
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.bind))?;

    let cors_status = if config.cors_origins.is_empty() {
        "disabled".to_string()
    } else if config.cors_origins.iter().any(|o| o == "*") {
        "allow-all".to_string()
    } else {
        format!("{} origins", config.cors_origins.len())
    };

    tracing::info!(
        target: "learnavia::http",
        bind = %addr,
        cors = cors_status,
        catalog = state.catalog.len(),
        "Starting recommendation service"
    );

    let app = build_app(state, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!(
        target: "learnavia::http",
        bind = %addr,
        "HTTP server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!(target: "learnavia::http", "HTTP server stopped");
    Ok(())
}
