//! HTTP server bootstrap for the milestone verification oracle.
//!
//! This module wires together:
//! - configuration
//! - the content-addressed proof store client
//! - the oracle service and metrics registry
//! - the Axum router

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::infra::HttpGatewayStore;
use crate::metrics::MetricsRegistry;
use crate::oracle::Oracle;
use crate::telemetry::{init_telemetry, TelemetryConfig};

/// Default bounded timeout for the proof fetch step.
const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IPFS HTTP gateway base URL.
    pub gateway_url: String,
    /// Server listen address.
    pub listen_addr: SocketAddr,
    /// Timeout applied to each proof fetch.
    pub fetch_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let gateway_url =
            std::env::var("IPFS_GATEWAY_URL").unwrap_or_else(|_| "https://ipfs.io".to_string());

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let listen_addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address: {e}"))?;

        let fetch_timeout = std::env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT);

        Ok(Self {
            gateway_url,
            listen_addr,
            fetch_timeout,
        })
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub oracle: Arc<Oracle>,
    pub metrics: Arc<MetricsRegistry>,
}

/// Start the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    let telemetry = TelemetryConfig::from_env();
    init_telemetry(&telemetry);

    info!(
        "Starting {} v{}",
        telemetry.service_name,
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    info!("Configuration loaded");
    info!("  Listen address: {}", config.listen_addr);
    info!("  Gateway URL: {}", config.gateway_url);
    info!("  Fetch timeout: {:?}", config.fetch_timeout);

    let store = Arc::new(HttpGatewayStore::new(
        config.gateway_url.as_str(),
        config.fetch_timeout,
    )?);
    let oracle = Arc::new(Oracle::new(store));
    let metrics = Arc::new(MetricsRegistry::new());

    let state = AppState { oracle, metrics };
    let app = build_router()?.with_state(state);

    info!("Starting HTTP server on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    info!("Milestone oracle is ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_router() -> anyhow::Result<Router<AppState>> {
    let mut router = Router::new()
        .merge(crate::api::router())
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http());

    if let Some(cors_layer) = cors_layer_from_env()? {
        router = router.layer(cors_layer);
    }

    Ok(router)
}

fn cors_layer_from_env() -> anyhow::Result<Option<CorsLayer>> {
    let origins = match std::env::var("CORS_ALLOW_ORIGINS") {
        Ok(v) => v,
        Err(_) => return Ok(None),
    };

    let origins = origins.trim();
    if origins.is_empty() {
        return Ok(None);
    }

    let allow_origin = if origins == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = origins
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin {s:?}: {e}"))
            })
            .collect::<anyhow::Result<_>>()?;
        AllowOrigin::list(origins)
    };

    Ok(Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    ))
}

/// Install signal handlers and return a future that completes on shutdown.
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}

/// Health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "service": "milestone-oracle",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
