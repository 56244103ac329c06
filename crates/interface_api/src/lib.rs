//! HTTP API Layer
//!
//! This crate provides the REST API for the claims fraud screening service
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Fraud detection, document analysis, translation, currency and health
//! - **Middleware**: Authentication, tracing, request IDs, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::from_config(config)?;
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
    extract::DefaultBodyLimit,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use core_kernel::{CircuitBreakerConfig, CoreError, ExchangeRateProvider, FixedExchangeRateProvider};
use infra_external::{
    DocumentAnalysisPort, HttpDocumentAnalyzer, HttpTranslator, HttpUpstreamConfig,
    ResilientDocumentAnalyzer, ResilientTranslator, TranslationPort, UnconfiguredUpstream,
};

use crate::config::ApiConfig;
use crate::middleware::{audit_middleware, auth_middleware};
use crate::handlers::{currency, documents, fraud, health, translation};

/// Largest accepted policy document upload
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub exchange_rates: Arc<dyn ExchangeRateProvider>,
    pub documents: Arc<ResilientDocumentAnalyzer>,
    pub translator: Arc<ResilientTranslator>,
}

impl AppState {
    /// Builds the state from configuration
    ///
    /// Upstreams without a configured URL are replaced by
    /// [`UnconfiguredUpstream`], so their endpoints serve fallback data.
    pub fn from_config(config: ApiConfig) -> Result<Self, CoreError> {
        let exchange_rates = Arc::new(FixedExchangeRateProvider::usd_inr(config.usd_to_inr_rate)?);

        let document_port: Arc<dyn DocumentAnalysisPort> = match &config.document_analysis_url {
            Some(url) => Arc::new(HttpDocumentAnalyzer::new(upstream_config(&config, url))?),
            None => {
                info!("No document analysis URL configured, serving default analyses");
                Arc::new(UnconfiguredUpstream::new(HttpDocumentAnalyzer::ADAPTER_ID))
            }
        };

        let translation_port: Arc<dyn TranslationPort> = match &config.translation_url {
            Some(url) => Arc::new(HttpTranslator::new(upstream_config(&config, url))?),
            None => {
                info!("No translation URL configured, serving identity translations");
                Arc::new(UnconfiguredUpstream::new(HttpTranslator::ADAPTER_ID))
            }
        };

        Ok(Self::with_ports(config, exchange_rates, document_port, translation_port))
    }

    /// Builds the state around explicit ports
    pub fn with_ports(
        config: ApiConfig,
        exchange_rates: Arc<dyn ExchangeRateProvider>,
        document_port: Arc<dyn DocumentAnalysisPort>,
        translation_port: Arc<dyn TranslationPort>,
    ) -> Self {
        let breaker = CircuitBreakerConfig {
            failure_threshold: config.upstream_failure_threshold,
            reset_timeout_secs: config.upstream_reset_timeout_secs,
            ..CircuitBreakerConfig::default()
        };

        Self {
            documents: Arc::new(ResilientDocumentAnalyzer::new(document_port, breaker.clone())),
            translator: Arc::new(ResilientTranslator::new(translation_port, breaker)),
            exchange_rates,
            config,
        }
    }
}

fn upstream_config(config: &ApiConfig, url: &str) -> HttpUpstreamConfig {
    let upstream = HttpUpstreamConfig::new(url).with_timeout_secs(config.upstream_timeout_secs);
    match &config.upstream_api_key {
        Some(key) => upstream.with_api_key(key.clone()),
        None => upstream,
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let fraud_routes = Router::new()
        .route("/detect", post(fraud::detect_fraud));

    let document_routes = Router::new()
        .route("/analyze", post(documents::analyze_document))
        .layer(DefaultBodyLimit::max(MAX_DOCUMENT_BYTES));

    let currency_routes = Router::new()
        .route("/convert", get(currency::convert));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/fraud", fraud_routes)
        .nest("/documents", document_routes)
        .route("/translate", post(translation::translate))
        .nest("/currency", currency_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
