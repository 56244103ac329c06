//! Fraud detection handlers

use axum::{extract::State, Json};
use tracing::info;

use domain_claims::{assess, ClaimSubmission};

use crate::{AppState, error::ApiError};
use crate::dto::fraud::FraudDetectionResponse;

/// Scores a claim submission for fraud risk
pub async fn detect_fraud(
    State(_state): State<AppState>,
    Json(claim): Json<ClaimSubmission>,
) -> Result<Json<FraudDetectionResponse>, ApiError> {
    claim.validate()?;

    let assessment = assess(&claim);

    info!(
        insurance_type = ?claim.insurance_type,
        score = assessment.score,
        risk_level = ?assessment.risk_level,
        flags = assessment.flags.len(),
        "Claim assessed"
    );

    Ok(Json(assessment.into()))
}
