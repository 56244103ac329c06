//! API configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::DEFAULT_USD_TO_INR;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// API configuration
///
/// Every field has a default, so a bare environment yields a runnable
/// server that serves fallback data for both upstream collaborators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level filter used when RUST_LOG is not set
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Whether `/api/v1` requires a bearer token
    pub auth_enabled: bool,
    /// Shared secret of the identity provider's HS256 tokens
    pub jwt_secret: String,
    /// USD to INR conversion rate
    pub usd_to_inr_rate: Decimal,
    /// Base URL of the document analysis service
    pub document_analysis_url: Option<String>,
    /// Base URL of the translation service
    pub translation_url: Option<String>,
    /// Bearer token sent to upstream services
    pub upstream_api_key: Option<String>,
    /// Upstream request timeout in seconds
    pub upstream_timeout_secs: u64,
    /// Consecutive upstream failures before the circuit opens
    pub upstream_failure_threshold: u32,
    /// Seconds an open circuit waits before letting a call through
    pub upstream_reset_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            auth_enabled: true,
            jwt_secret: "change-me-in-production".to_string(),
            usd_to_inr_rate: DEFAULT_USD_TO_INR,
            document_analysis_url: None,
            translation_url: None,
            upstream_api_key: None,
            upstream_timeout_secs: 10,
            upstream_failure_threshold: 5,
            upstream_reset_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.usd_to_inr_rate, DEFAULT_USD_TO_INR);
        assert!(config.document_analysis_url.is_none());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: ApiConfig = config::Config::builder()
            .set_override("port", 9090)
            .unwrap()
            .set_override("translation_url", "http://translate.local")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.translation_url.as_deref(), Some("http://translate.local"));
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.auth_enabled);
    }
}
