//! Policy document analysis handlers

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use core_kernel::Sourced;
use infra_external::{DocumentUpload, PolicyAnalysis};

use crate::{AppState, error::ApiError};

/// Name of the multipart part carrying the document
pub const FILE_FIELD: &str = "file";

/// Analyzes an uploaded policy document
///
/// Always answers 200 once a file is received; fallback analyses carry
/// `degraded: true`.
pub async fn analyze_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Sourced<PolicyAnalysis>>, ApiError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("document").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        upload = Some(DocumentUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let upload = upload.ok_or_else(|| {
        ApiError::BadRequest(format!("multipart part \"{}\" is required", FILE_FIELD))
    })?;

    if upload.bytes.is_empty() {
        return Err(ApiError::BadRequest("uploaded file is empty".to_string()));
    }

    let analysis = state.documents.analyze(&upload).await;

    info!(
        file = %upload.file_name,
        size = upload.bytes.len(),
        degraded = analysis.degraded,
        "Document analyzed"
    );

    Ok(Json(analysis))
}
