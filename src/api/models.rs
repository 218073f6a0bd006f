use serde::{Deserialize, Serialize};

/// Body accepted by `/generate-caption/`; a missing prompt counts as empty.
#[derive(Debug, Deserialize)]
pub struct CaptionRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct CaptionResponse {
    pub caption: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Fields posted by the page's form.
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub prompt: String,
}
