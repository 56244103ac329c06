//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("Invalid claim submission: {}", .violations.join("; "))]
    InvalidInput { violations: Vec<String> },
}

impl ClaimError {
    /// Individual rule violations, in the order they were detected
    pub fn violations(&self) -> &[String] {
        match self {
            ClaimError::InvalidInput { violations } => violations,
        }
    }
}
