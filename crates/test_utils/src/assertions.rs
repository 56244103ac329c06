//! Custom Test Assertions
//!
//! Assertion helpers for fraud assessments that give more meaningful error
//! messages than standard assertions.

use domain_claims::{FlagType, FraudAssessment};

/// Asserts that the assessment carries exactly these flag types, in this order
pub fn assert_flag_types(assessment: &FraudAssessment, expected: &[FlagType]) {
    let actual: Vec<FlagType> = assessment.flags.iter().map(|f| f.flag_type).collect();
    assert_eq!(
        actual, expected,
        "Flag mismatch: actual={:?}, expected={:?}",
        actual, expected
    );
}

/// Asserts that a recommendation is present
pub fn assert_recommends(assessment: &FraudAssessment, recommendation: &str) {
    assert!(
        assessment.recommendations.iter().any(|r| r == recommendation),
        "Expected recommendation {:?}, got {:?}",
        recommendation,
        assessment.recommendations
    );
}

/// Asserts that a recommendation is absent
pub fn assert_not_recommends(assessment: &FraudAssessment, recommendation: &str) {
    assert!(
        !assessment.recommendations.iter().any(|r| r == recommendation),
        "Unexpected recommendation {:?} in {:?}",
        recommendation,
        assessment.recommendations
    );
}
