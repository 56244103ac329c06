//! Policy document analysis
//!
//! The upstream analyzer accepts a policy document as a multipart upload and
//! returns whatever coverage details it could extract. Fields it could not
//! extract are filled from [`PolicyAnalysis::default_analysis`].

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use core_kernel::{
    AdapterHealth, CircuitBreakerConfig, DomainPort, HealthCheckResult, HealthCheckable,
    PortError, Sourced,
};

use crate::circuit_breaker::CircuitBreaker;
use crate::http::{self, HttpUpstreamConfig};

/// Structured summary of a policy document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyAnalysis {
    pub coverage_summary: String,
    pub coverage_amount: Decimal,
    pub deductible: Decimal,
    pub exclusions: Vec<String>,
    pub waiting_period_days: u32,
    pub claim_process: Vec<String>,
}

impl PolicyAnalysis {
    /// The fixed analysis served when the upstream service cannot answer
    pub fn default_analysis() -> Self {
        Self {
            coverage_summary: "Comprehensive coverage for accidental damage, theft and third-party liability under standard policy terms".to_string(),
            coverage_amount: dec!(500000),
            deductible: dec!(5000),
            exclusions: vec![
                "Pre-existing damage".to_string(),
                "Normal wear and tear".to_string(),
                "Driving under the influence".to_string(),
                "Intentional damage".to_string(),
            ],
            waiting_period_days: 30,
            claim_process: vec![
                "Notify the insurer within 48 hours of the incident".to_string(),
                "Submit the claim form with supporting documents".to_string(),
                "Schedule an inspection with the assigned adjuster".to_string(),
                "Receive the settlement decision".to_string(),
            ],
        }
    }
}

/// Upstream response; any field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyAnalysisPatch {
    pub coverage_summary: Option<String>,
    pub coverage_amount: Option<Decimal>,
    pub deductible: Option<Decimal>,
    pub exclusions: Option<Vec<String>>,
    pub waiting_period_days: Option<u32>,
    pub claim_process: Option<Vec<String>>,
}

impl PolicyAnalysisPatch {
    pub fn is_complete(&self) -> bool {
        self.coverage_summary.is_some()
            && self.coverage_amount.is_some()
            && self.deductible.is_some()
            && self.exclusions.is_some()
            && self.waiting_period_days.is_some()
            && self.claim_process.is_some()
    }

    /// Fills missing fields from the default analysis
    pub fn merge_defaults(self) -> PolicyAnalysis {
        let defaults = PolicyAnalysis::default_analysis();
        PolicyAnalysis {
            coverage_summary: self.coverage_summary.unwrap_or(defaults.coverage_summary),
            coverage_amount: self.coverage_amount.unwrap_or(defaults.coverage_amount),
            deductible: self.deductible.unwrap_or(defaults.deductible),
            exclusions: self.exclusions.unwrap_or(defaults.exclusions),
            waiting_period_days: self.waiting_period_days.unwrap_or(defaults.waiting_period_days),
            claim_process: self.claim_process.unwrap_or(defaults.claim_process),
        }
    }
}

impl From<PolicyAnalysis> for PolicyAnalysisPatch {
    fn from(analysis: PolicyAnalysis) -> Self {
        Self {
            coverage_summary: Some(analysis.coverage_summary),
            coverage_amount: Some(analysis.coverage_amount),
            deductible: Some(analysis.deductible),
            exclusions: Some(analysis.exclusions),
            waiting_period_days: Some(analysis.waiting_period_days),
            claim_process: Some(analysis.claim_process),
        }
    }
}

/// An uploaded document
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Port to the document analysis service
#[async_trait]
pub trait DocumentAnalysisPort: DomainPort + HealthCheckable {
    async fn analyze(&self, document: &DocumentUpload) -> Result<PolicyAnalysisPatch, PortError>;
}

/// Document analysis over HTTP (`POST {base}/analyze`, multipart part `file`)
#[derive(Debug)]
pub struct HttpDocumentAnalyzer {
    config: HttpUpstreamConfig,
    client: reqwest::Client,
}

impl HttpDocumentAnalyzer {
    pub const ADAPTER_ID: &'static str = "document-analysis";

    pub fn new(config: HttpUpstreamConfig) -> Result<Self, PortError> {
        let client = http::build_client(&config)?;
        Ok(Self { config, client })
    }
}

impl DomainPort for HttpDocumentAnalyzer {}

#[async_trait]
impl HealthCheckable for HttpDocumentAnalyzer {
    async fn health_check(&self) -> HealthCheckResult {
        http::probe_health(Self::ADAPTER_ID, &self.client, &self.config).await
    }
}

#[async_trait]
impl DocumentAnalysisPort for HttpDocumentAnalyzer {
    async fn analyze(&self, document: &DocumentUpload) -> Result<PolicyAnalysisPatch, PortError> {
        let mut part = Part::bytes(document.bytes.clone()).file_name(document.file_name.clone());
        if let Some(content_type) = &document.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| PortError::Validation { message: e.to_string() })?;
        }
        let form = Form::new().part("file", part);

        let mut request = self.client.post(self.config.url("analyze")).multipart(form);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        debug!(file = %document.file_name, size = document.bytes.len(), "Sending document for analysis");

        let response = request
            .send()
            .await
            .map_err(|e| http::map_transport_error("analyze", self.config.timeout_secs, e))?;
        let response = http::check_status(Self::ADAPTER_ID, response)?;

        response
            .json::<PolicyAnalysisPatch>()
            .await
            .map_err(|e| http::map_transport_error("analyze", self.config.timeout_secs, e))
    }
}

/// Document analysis with circuit breaking and default-substitution
pub struct ResilientDocumentAnalyzer {
    inner: Arc<dyn DocumentAnalysisPort>,
    breaker: CircuitBreaker,
}

impl ResilientDocumentAnalyzer {
    pub fn new(inner: Arc<dyn DocumentAnalysisPort>, breaker: CircuitBreakerConfig) -> Self {
        Self {
            inner,
            breaker: CircuitBreaker::new(breaker),
        }
    }

    /// Analyzes a document; never fails
    ///
    /// A complete upstream answer is returned as-is, a partial one is merged
    /// with defaults, and any failure yields the default analysis. The last
    /// two are flagged degraded.
    pub async fn analyze(&self, document: &DocumentUpload) -> Sourced<PolicyAnalysis> {
        if !self.breaker.is_available().await {
            warn!(file = %document.file_name, "Document analysis circuit open, serving default analysis");
            return Sourced::fallback(PolicyAnalysis::default_analysis());
        }

        match self.inner.analyze(document).await {
            Ok(patch) => {
                self.breaker.record_success();
                if patch.is_complete() {
                    Sourced::upstream(patch.merge_defaults())
                } else {
                    debug!(file = %document.file_name, "Upstream analysis incomplete, merging defaults");
                    Sourced::merged(patch.merge_defaults())
                }
            }
            Err(e) => {
                self.breaker.record_failure().await;
                warn!(error = %e, file = %document.file_name, "Document analysis failed, serving default analysis");
                Sourced::fallback(PolicyAnalysis::default_analysis())
            }
        }
    }
}

#[async_trait]
impl HealthCheckable for ResilientDocumentAnalyzer {
    async fn health_check(&self) -> HealthCheckResult {
        if self.breaker.is_open() {
            return HealthCheckResult::new(HttpDocumentAnalyzer::ADAPTER_ID, AdapterHealth::Degraded)
                .with_message("circuit breaker is open");
        }
        self.inner.health_check().await
    }
}
