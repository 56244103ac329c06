//! InsuraAI API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (fallback data for both upstreams)
//! cargo run --bin insuraai-api
//!
//! # Run against live upstreams
//! API_DOCUMENT_ANALYSIS_URL=http://docs:9000 API_TRANSLATION_URL=http://translate:9100 \
//!     cargo run --bin insuraai-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_LOG_FORMAT` - `text` or `json` (default: text)
//! * `API_AUTH_ENABLED` - Require bearer tokens on `/api/v1` (default: true)
//! * `API_JWT_SECRET` - Identity provider's token secret (required in production)
//! * `API_USD_TO_INR_RATE` - USD to INR exchange rate (default: 83.5)
//! * `API_DOCUMENT_ANALYSIS_URL` - Document analysis service base URL
//! * `API_TRANSLATION_URL` - Translation service base URL
//! * `API_UPSTREAM_API_KEY` - Bearer token for upstream services
//! * `API_UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 10)

use anyhow::Context;
use interface_api::{config::{ApiConfig, LogFormat}, create_router, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API_* configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        auth_enabled = config.auth_enabled,
        usd_to_inr_rate = %config.usd_to_inr_rate,
        "Starting InsuraAI API Server"
    );

    if config.auth_enabled && config.jwt_secret == ApiConfig::default().jwt_secret {
        tracing::warn!("API_JWT_SECRET is not set, using the development secret");
    }

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    let state = AppState::from_config(config).context("failed to build application state")?;
    let app = create_router(state);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (json, text) = match format {
        LogFormat::Json => (Some(tracing_subscriber::fmt::layer().json().with_target(true)), None),
        LogFormat::Text => (None, Some(tracing_subscriber::fmt::layer().with_target(true))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
