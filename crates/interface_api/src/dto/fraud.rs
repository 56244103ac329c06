//! Fraud detection DTOs

use serde::Serialize;

use domain_claims::FraudAssessment;

/// Assessment as returned to clients
///
/// `score` is the raw rule sum and may exceed 100; `displayScore` is capped.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudDetectionResponse {
    #[serde(flatten)]
    pub assessment: FraudAssessment,
    pub display_score: u32,
}

impl From<FraudAssessment> for FraudDetectionResponse {
    fn from(assessment: FraudAssessment) -> Self {
        Self {
            display_score: assessment.display_score(),
            assessment,
        }
    }
}
