//! Claims Fraud Screening Domain
//!
//! This crate scores incoming claim submissions for fraud risk. Scoring is a
//! pure function: no I/O, no logging, no shared state, so it can be called
//! concurrently from any number of request handlers.
//!
//! # Flow
//!
//! ```text
//! ClaimSubmission -> rules (fixed order) -> score -> risk level -> recommendations
//! ```
//!
//! [`assess`] accepts any submission and never fails. Callers that want the
//! strict input contract call [`ClaimSubmission::validate`] first.

pub mod submission;
pub mod fraud;
pub mod recommendation;
pub mod error;

pub use submission::{ClaimSubmission, InsuranceType, IncidentSeverity, RiskSegment};
pub use fraud::{assess, FlagSeverity, FlagType, FraudAssessment, FraudFlag, FraudRule, RiskLevel, FRAUD_RULES};
pub use recommendation::derive_recommendations;
pub use error::ClaimError;
