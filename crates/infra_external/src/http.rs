//! Shared HTTP plumbing for upstream adapters

use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

use core_kernel::{AdapterHealth, HealthCheckResult, PortError};

/// Connection settings for one upstream HTTP service
#[derive(Debug, Clone)]
pub struct HttpUpstreamConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Optional bearer token sent with every request
    pub api_key: Option<String>,
}

impl HttpUpstreamConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: 10,
            api_key: None,
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

pub(crate) fn build_client(config: &HttpUpstreamConfig) -> Result<Client, PortError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| PortError::Connection {
            message: "failed to build HTTP client".to_string(),
            source: Some(Box::new(e)),
        })
}

/// Maps a transport-level reqwest failure
pub(crate) fn map_transport_error(operation: &str, timeout_secs: u64, err: reqwest::Error) -> PortError {
    if err.is_timeout() {
        return PortError::Timeout {
            operation: operation.to_string(),
            duration_ms: timeout_secs * 1000,
        };
    }
    if err.is_decode() {
        return PortError::transformation(format!("{}: {}", operation, err));
    }
    PortError::Connection {
        message: format!("{} failed", operation),
        source: Some(Box::new(err)),
    }
}

/// Maps non-success HTTP statuses onto port errors
pub(crate) fn check_status(service: &str, response: Response) -> Result<Response, PortError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let err = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PortError::Unauthorized {
            message: format!("{} rejected credentials ({})", service, status),
        },
        StatusCode::NOT_FOUND => PortError::NotFound {
            resource: response.url().path().to_string(),
        },
        StatusCode::TOO_MANY_REQUESTS => PortError::RateLimited {
            retry_after_secs: retry_after_secs(&response).unwrap_or(60),
        },
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => PortError::Validation {
            message: format!("{} rejected request ({})", service, status),
        },
        s if s.is_server_error() => PortError::unavailable(format!("{} ({})", service, s)),
        s => PortError::connection(format!("{} returned unexpected status {}", service, s)),
    };
    Err(err)
}

fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

/// Probes `GET {base}/health`
pub(crate) async fn probe_health(adapter_id: &str, client: &Client, config: &HttpUpstreamConfig) -> HealthCheckResult {
    match client.get(config.url("health")).send().await {
        Ok(resp) if resp.status().is_success() => HealthCheckResult::new(adapter_id, AdapterHealth::Healthy),
        Ok(resp) => HealthCheckResult::new(adapter_id, AdapterHealth::Unhealthy)
            .with_message(format!("health endpoint returned {}", resp.status())),
        Err(e) => HealthCheckResult::new(adapter_id, AdapterHealth::Unhealthy).with_message(e.to_string()),
    }
}
