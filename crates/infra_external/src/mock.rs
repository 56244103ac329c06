//! In-memory port doubles for tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};

use crate::document_analysis::{DocumentAnalysisPort, DocumentUpload, PolicyAnalysisPatch};
use crate::translation::TranslationPort;

/// How a mock answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    Succeed,
    Fail,
    /// Translation only: drops the last string
    WrongLength,
}

/// Document analyzer returning a canned patch or failing
#[derive(Debug)]
pub struct MockDocumentAnalyzer {
    patch: PolicyAnalysisPatch,
    behavior: Mutex<MockBehavior>,
    calls: AtomicUsize,
}

impl MockDocumentAnalyzer {
    pub fn succeeding(patch: PolicyAnalysisPatch) -> Self {
        Self {
            patch,
            behavior: Mutex::new(MockBehavior::Succeed),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            patch: PolicyAnalysisPatch::default(),
            behavior: Mutex::new(MockBehavior::Fail),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DomainPort for MockDocumentAnalyzer {}

#[async_trait]
impl HealthCheckable for MockDocumentAnalyzer {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::new("mock-document-analysis", AdapterHealth::Healthy)
    }
}

#[async_trait]
impl DocumentAnalysisPort for MockDocumentAnalyzer {
    async fn analyze(&self, _document: &DocumentUpload) -> Result<PolicyAnalysisPatch, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let behavior = *self.behavior.lock().unwrap();
        match behavior {
            MockBehavior::Succeed | MockBehavior::WrongLength => Ok(self.patch.clone()),
            MockBehavior::Fail => Err(PortError::unavailable("mock-document-analysis")),
        }
    }
}

/// Translator answering `"{lang}:{text}"`
#[derive(Debug)]
pub struct MockTranslator {
    behavior: Mutex<MockBehavior>,
    calls: AtomicUsize,
}

impl MockTranslator {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DomainPort for MockTranslator {}

#[async_trait]
impl HealthCheckable for MockTranslator {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::new("mock-translation", AdapterHealth::Healthy)
    }
}

#[async_trait]
impl TranslationPort for MockTranslator {
    async fn translate(&self, texts: &[String], target_language: &str) -> Result<Vec<String>, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let behavior = *self.behavior.lock().unwrap();
        let mut translated: Vec<String> = texts
            .iter()
            .map(|text| format!("{}:{}", target_language, text))
            .collect();
        match behavior {
            MockBehavior::Succeed => Ok(translated),
            MockBehavior::WrongLength => {
                translated.pop();
                Ok(translated)
            }
            MockBehavior::Fail => Err(PortError::Timeout {
                operation: "translate".to_string(),
                duration_ms: 10_000,
            }),
        }
    }
}
