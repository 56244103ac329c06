//! Translation handlers

use axum::{extract::State, Json};
use validator::Validate;

use crate::{AppState, error::ApiError};
use crate::dto::translation::{TranslateRequest, TranslateResponse};

/// Translates a batch of texts, preserving order
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    request.validate()?;

    let result = state
        .translator
        .translate(&request.texts, &request.target_language)
        .await;

    Ok(Json(TranslateResponse {
        translations: result.value,
        degraded: result.degraded,
    }))
}
