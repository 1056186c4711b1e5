//! Server wiring: config, shared state, router, and lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::{Json, Router};
use marketstack_api::Client;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Server configuration, assembled in `main` from CLI flags and env vars.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// marketstack account access key, forwarded on every upstream call.
    pub access_key: String,
    /// Upstream base URL override. `None` uses the production API.
    pub base_url: Option<String>,
}

/// Shared application state: the upstream API client.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<Client>,
}

/// The HTTP service.
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

/// Builds the service router. Public so tests can drive it without a listener.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/eod", get(handlers::eod::eod))
        .route("/eod/latest", get(handlers::eod::eod_latest))
        .route("/historical", get(handlers::eod::historical))
        .route("/intraday", get(handlers::intraday::intraday))
        .route("/intraday/latest", get(handlers::intraday::intraday_latest))
        .route(
            "/intraday/realtime",
            get(handlers::intraday::intraday_realtime),
        )
        .route("/dividends", get(handlers::dividends::dividends))
        .route("/splits", get(handlers::splits::splits))
        .route("/tickers", get(handlers::tickers::tickers))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

impl Server {
    /// Creates a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let client = match &config.base_url {
            Some(base_url) => Client::with_base_url(base_url, config.access_key.clone()),
            None => Client::new(config.access_key.clone()),
        }
        .context("failed to build upstream API client")?;
        let state = AppState {
            client: Arc::new(client),
        };
        Ok(Self { config, state })
    }

    /// Runs the server until ctrl-c or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let router = router(self.state);

        tracing::info!(addr = %self.config.addr, "starting stockdata server");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .with_context(|| format!("failed to bind {}", self.config.addr))?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received ctrl-c, shutting down");
        },
        () = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        },
    }
}
