//! Upstream Collaborator Adapters
//!
//! The claims platform delegates two jobs to external HTTP services:
//!
//! - **Document analysis**: turns an uploaded policy document into coverage,
//!   deductible and exclusion details
//! - **Translation**: translates a batch of UI strings into a target language
//!
//! Both are reached through a port trait. Callers never talk to a port
//! directly; they go through a resilient wrapper that applies a circuit
//! breaker and substitutes documented fallback data when the upstream call
//! fails. Every value returned by a wrapper is a [`core_kernel::Sourced`], so
//! fallback data is always flagged `degraded`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_external::{HttpTranslator, HttpUpstreamConfig, ResilientTranslator};
//! use std::sync::Arc;
//!
//! let port = HttpTranslator::new(HttpUpstreamConfig::new("https://translate.example.com"))?;
//! let translator = ResilientTranslator::new(Arc::new(port), Default::default());
//!
//! let result = translator.translate(&texts, "hi").await;
//! if result.degraded { /* identity fallback was used */ }
//! ```

pub mod circuit_breaker;
pub mod http;
pub mod document_analysis;
pub mod translation;
pub mod unconfigured;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use circuit_breaker::CircuitBreaker;
pub use http::HttpUpstreamConfig;
pub use document_analysis::{
    DocumentAnalysisPort, DocumentUpload, HttpDocumentAnalyzer, PolicyAnalysis,
    PolicyAnalysisPatch, ResilientDocumentAnalyzer,
};
pub use translation::{
    identity_fallback, HttpTranslator, ResilientTranslator, TranslationPort,
};
pub use unconfigured::UnconfiguredUpstream;
