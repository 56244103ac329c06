//! Ports and Adapters Infrastructure
//!
//! Shared types for the upstream collaborators the claims platform talks to
//! (document analysis, translation). Each collaborator is reached through a
//! port trait; adapters implement the port against a real HTTP service or an
//! in-memory double.
//!
//! ```text
//!        ┌──────────────────────┐
//!        │  interface_api       │
//!        └──────────┬───────────┘
//!                   │ Sourced<T>
//!        ┌──────────▼───────────┐
//!        │  Resilient wrapper   │  circuit breaker + fallback
//!        └──────────┬───────────┘
//!                   │ Result<T, PortError>
//!        ┌──────────▼───────────┐
//!        │  Port adapter (HTTP) │
//!        └──────────────────────┘
//! ```
//!
//! Fallback data is never indistinguishable from live data: every value
//! leaving a resilient wrapper is wrapped in [`Sourced`], which carries a
//! `degraded` flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested resource was not found upstream
    #[error("Not found: {resource}")]
    NotFound {
        resource: String,
    },

    /// The request was rejected as invalid
    #[error("Validation error: {message}")]
    Validation {
        message: String,
    },

    /// Connection to the upstream system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// Authentication with the upstream system failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// Rate limit exceeded for external API
    #[error("Rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        retry_after_secs: u64,
    },

    /// The upstream system is unavailable or the circuit is open
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// The upstream response could not be mapped to the domain model
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },
}

impl PortError {
    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a ServiceUnavailable error
    pub fn unavailable(service: impl Into<String>) -> Self {
        PortError::ServiceUnavailable {
            service: service.into(),
        }
    }

    /// Creates a Transformation error
    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::RateLimited { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }
}

/// Marker trait for all ports
pub trait DomainPort: Send + Sync + 'static {}

/// Circuit breaker configuration for external adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitBreakerConfig {
    /// Number of consecutive failures before opening the circuit
    pub failure_threshold: u32,
    /// Duration in seconds the circuit stays open before half-opening
    pub reset_timeout_secs: u64,
    /// Number of successful calls needed to close the circuit from half-open
    pub success_threshold: u32,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            reset_timeout_secs: 30,
            success_threshold: 1,
        }
    }
}

/// Where a value handed to the caller came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Returned by the upstream service as-is
    Upstream,
    /// Upstream response with missing fields filled from defaults
    Merged,
    /// Hard-coded fallback substituted for a failed upstream call
    Fallback,
}

/// A value tagged with its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sourced<T> {
    pub value: T,
    pub degraded: bool,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    /// Value served by the upstream service
    pub fn upstream(value: T) -> Self {
        Self {
            value,
            degraded: false,
            source: DataSource::Upstream,
        }
    }

    /// Upstream value patched with defaults
    pub fn merged(value: T) -> Self {
        Self {
            value,
            degraded: true,
            source: DataSource::Merged,
        }
    }

    /// Fallback value
    pub fn fallback(value: T) -> Self {
        Self {
            value,
            degraded: true,
            source: DataSource::Fallback,
        }
    }

    /// Maps the wrapped value, keeping provenance
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            value: f(self.value),
            degraded: self.degraded,
            source: self.source,
        }
    }
}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is serving fallback data
    Degraded,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: DateTime<Utc>,
}

impl HealthCheckResult {
    pub fn new(adapter_id: impl Into<String>, status: AdapterHealth) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status,
            message: None,
            checked_at: Utc::now(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_transient() {
        let timeout = PortError::Timeout {
            operation: "translate".to_string(),
            duration_ms: 5000,
        };
        assert!(timeout.is_transient());

        let rate_limited = PortError::RateLimited {
            retry_after_secs: 60,
        };
        assert!(rate_limited.is_transient());

        assert!(PortError::unavailable("document-analysis").is_transient());
        assert!(!PortError::transformation("bad json").is_transient());
    }

    #[test]
    fn test_sourced_flags() {
        assert!(!Sourced::upstream(1).degraded);
        assert!(Sourced::merged(1).degraded);

        let fallback = Sourced::fallback(2).map(|v| v * 10);
        assert_eq!(fallback.value, 20);
        assert!(fallback.degraded);
        assert_eq!(fallback.source, DataSource::Fallback);
    }

    #[test]
    fn test_sourced_serializes_provenance() {
        let json = serde_json::to_value(Sourced::fallback("x")).unwrap();
        assert_eq!(json["degraded"], true);
        assert_eq!(json["source"], "fallback");
        assert_eq!(json["value"], "x");
    }

    #[test]
    fn test_health_check_result_builder() {
        let result = HealthCheckResult::new("translation", AdapterHealth::Degraded)
            .with_message("circuit open");
        assert_eq!(result.status, AdapterHealth::Degraded);
        assert_eq!(result.message.as_deref(), Some("circuit open"));
    }
}
