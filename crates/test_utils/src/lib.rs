//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims platform test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claim submissions for documented scenarios
//! - `builders`: Builder for claim submissions with benign defaults
//! - `assertions`: Assertion helpers for fraud assessments
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
