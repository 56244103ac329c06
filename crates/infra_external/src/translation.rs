//! Batch text translation

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use core_kernel::{
    AdapterHealth, CircuitBreakerConfig, DomainPort, HealthCheckResult, HealthCheckable,
    PortError, Sourced,
};

use crate::circuit_breaker::CircuitBreaker;
use crate::http::{self, HttpUpstreamConfig};

/// Port to the translation service
///
/// Implementations return one translation per input text, in input order.
#[async_trait]
pub trait TranslationPort: DomainPort + HealthCheckable {
    async fn translate(&self, texts: &[String], target_language: &str) -> Result<Vec<String>, PortError>;
}

/// Fallback used when translation is unavailable: `"[lang] text"`
pub fn identity_fallback(texts: &[String], target_language: &str) -> Vec<String> {
    texts
        .iter()
        .map(|text| format!("[{}] {}", target_language, text))
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest<'a> {
    texts: &'a [String],
    target_language: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<String>,
}

/// Translation over HTTP (`POST {base}/translate`)
#[derive(Debug)]
pub struct HttpTranslator {
    config: HttpUpstreamConfig,
    client: reqwest::Client,
}

impl HttpTranslator {
    pub const ADAPTER_ID: &'static str = "translation";

    pub fn new(config: HttpUpstreamConfig) -> Result<Self, PortError> {
        let client = http::build_client(&config)?;
        Ok(Self { config, client })
    }
}

impl DomainPort for HttpTranslator {}

#[async_trait]
impl HealthCheckable for HttpTranslator {
    async fn health_check(&self) -> HealthCheckResult {
        http::probe_health(Self::ADAPTER_ID, &self.client, &self.config).await
    }
}

#[async_trait]
impl TranslationPort for HttpTranslator {
    async fn translate(&self, texts: &[String], target_language: &str) -> Result<Vec<String>, PortError> {
        let body = TranslateRequest {
            texts,
            target_language,
        };

        let mut request = self.client.post(self.config.url("translate")).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| http::map_transport_error("translate", self.config.timeout_secs, e))?;
        let response = http::check_status(Self::ADAPTER_ID, response)?;

        let parsed = response
            .json::<TranslateResponse>()
            .await
            .map_err(|e| http::map_transport_error("translate", self.config.timeout_secs, e))?;
        Ok(parsed.translations)
    }
}

/// Translation with circuit breaking and identity fallback
pub struct ResilientTranslator {
    inner: Arc<dyn TranslationPort>,
    breaker: CircuitBreaker,
}

impl ResilientTranslator {
    pub fn new(inner: Arc<dyn TranslationPort>, breaker: CircuitBreakerConfig) -> Self {
        Self {
            inner,
            breaker: CircuitBreaker::new(breaker),
        }
    }

    /// Translates a batch; never fails
    ///
    /// An upstream answer with the wrong number of strings counts as a failure.
    pub async fn translate(&self, texts: &[String], target_language: &str) -> Sourced<Vec<String>> {
        if texts.is_empty() {
            return Sourced::upstream(Vec::new());
        }

        if !self.breaker.is_available().await {
            warn!(target_language, "Translation circuit open, serving identity fallback");
            return Sourced::fallback(identity_fallback(texts, target_language));
        }

        let result = self
            .inner
            .translate(texts, target_language)
            .await
            .and_then(|translated| {
                if translated.len() == texts.len() {
                    Ok(translated)
                } else {
                    Err(PortError::transformation(format!(
                        "expected {} translations, got {}",
                        texts.len(),
                        translated.len()
                    )))
                }
            });

        match result {
            Ok(translated) => {
                self.breaker.record_success();
                Sourced::upstream(translated)
            }
            Err(e) => {
                self.breaker.record_failure().await;
                warn!(error = %e, target_language, count = texts.len(), "Translation failed, serving identity fallback");
                Sourced::fallback(identity_fallback(texts, target_language))
            }
        }
    }
}

#[async_trait]
impl HealthCheckable for ResilientTranslator {
    async fn health_check(&self) -> HealthCheckResult {
        if self.breaker.is_open() {
            return HealthCheckResult::new(HttpTranslator::ADAPTER_ID, AdapterHealth::Degraded)
                .with_message("circuit breaker is open");
        }
        self.inner.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBehavior, MockTranslator};

    fn texts() -> Vec<String> {
        vec!["Claim approved".to_string(), "Upload documents".to_string()]
    }

    #[test]
    fn test_identity_fallback_format() {
        assert_eq!(
            identity_fallback(&texts(), "hi"),
            vec!["[hi] Claim approved".to_string(), "[hi] Upload documents".to_string()]
        );
    }

    #[tokio::test]
    async fn test_successful_translation_keeps_order() {
        let translator = ResilientTranslator::new(
            Arc::new(MockTranslator::new(MockBehavior::Succeed)),
            CircuitBreakerConfig::default(),
        );

        let result = translator.translate(&texts(), "es").await;
        assert!(!result.degraded);
        assert_eq!(
            result.value,
            vec!["es:Claim approved".to_string(), "es:Upload documents".to_string()]
        );
    }

    #[tokio::test]
    async fn test_wrong_length_falls_back() {
        let translator = ResilientTranslator::new(
            Arc::new(MockTranslator::new(MockBehavior::WrongLength)),
            CircuitBreakerConfig::default(),
        );

        let result = translator.translate(&texts(), "fr").await;
        assert!(result.degraded);
        assert_eq!(result.value, identity_fallback(&texts(), "fr"));
    }

    #[tokio::test]
    async fn test_failure_falls_back() {
        let translator = ResilientTranslator::new(
            Arc::new(MockTranslator::new(MockBehavior::Fail)),
            CircuitBreakerConfig::default(),
        );

        let result = translator.translate(&texts(), "ta").await;
        assert!(result.degraded);
        assert_eq!(result.value[0], "[ta] Claim approved");
    }

    #[tokio::test]
    async fn test_recovers_after_half_open_success() {
        let port = Arc::new(MockTranslator::new(MockBehavior::Fail));
        let config = CircuitBreakerConfig {
            failure_threshold: 1,
            reset_timeout_secs: 0,
            success_threshold: 1,
        };
        let translator = ResilientTranslator::new(port.clone(), config);

        assert!(translator.translate(&texts(), "es").await.degraded);
        assert_eq!(translator.health_check().await.status, AdapterHealth::Degraded);

        port.set_behavior(MockBehavior::Succeed);
        let result = translator.translate(&texts(), "es").await;
        assert!(!result.degraded);
        assert_eq!(translator.health_check().await.status, AdapterHealth::Healthy);
    }

    #[tokio::test]
    async fn test_empty_batch_skips_upstream() {
        let port = Arc::new(MockTranslator::new(MockBehavior::Fail));
        let translator = ResilientTranslator::new(port.clone(), CircuitBreakerConfig::default());

        let result = translator.translate(&[], "de").await;
        assert!(!result.degraded);
        assert!(result.value.is_empty());
        assert_eq!(port.calls(), 0);
    }
}
