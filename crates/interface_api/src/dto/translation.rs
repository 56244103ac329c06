//! Translation DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[validate(length(max = 200, message = "at most 200 texts per request"))]
    pub texts: Vec<String>,
    #[validate(length(min = 2, max = 10, message = "must be a language code such as \"hi\" or \"pt-BR\""))]
    pub target_language: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translations: Vec<String>,
    pub degraded: bool,
}
