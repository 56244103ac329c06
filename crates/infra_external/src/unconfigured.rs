//! Stand-in for an upstream service with no configured URL
//!
//! Every call fails with `ServiceUnavailable`, so the resilient wrappers
//! always serve their fallback and flag it degraded.

use async_trait::async_trait;

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};

use crate::document_analysis::{DocumentAnalysisPort, DocumentUpload, PolicyAnalysisPatch};
use crate::translation::TranslationPort;

#[derive(Debug, Clone)]
pub struct UnconfiguredUpstream {
    service: &'static str,
}

impl UnconfiguredUpstream {
    pub fn new(service: &'static str) -> Self {
        Self { service }
    }

    fn unavailable(&self) -> PortError {
        PortError::unavailable(format!("{} (no upstream URL configured)", self.service))
    }
}

impl DomainPort for UnconfiguredUpstream {}

#[async_trait]
impl HealthCheckable for UnconfiguredUpstream {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::new(self.service, AdapterHealth::Degraded)
            .with_message("no upstream URL configured, serving fallback data")
    }
}

#[async_trait]
impl DocumentAnalysisPort for UnconfiguredUpstream {
    async fn analyze(&self, _document: &DocumentUpload) -> Result<PolicyAnalysisPatch, PortError> {
        Err(self.unavailable())
    }
}

#[async_trait]
impl TranslationPort for UnconfiguredUpstream {
    async fn translate(&self, _texts: &[String], _target_language: &str) -> Result<Vec<String>, PortError> {
        Err(self.unavailable())
    }
}
