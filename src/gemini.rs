//! Gemini-backed caption generation for the `/generate-caption/` endpoint.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Duration};
use tracing::instrument;

use crate::config::GeminiSettings;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GeminiError {
    #[display("Gemini integration missing: set GEMINI_API_KEY")]
    MissingApiKey,
    #[display("Gemini request timed out")]
    Timeout,
    #[display("failed to send Gemini request: {source}")]
    Request { source: reqwest::Error },
    #[display("failed to decode Gemini response: {source}")]
    Decode { source: reqwest::Error },
    #[display("Gemini request failed ({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[display("Gemini response did not contain any text")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    settings: GeminiSettings,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    /// Generates a caption for `prompt` with the configured model.
    #[instrument(skip(self, prompt), fields(model = %self.settings.model))]
    pub async fn generate_caption(&self, prompt: &str) -> Result<String, GeminiError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(GeminiError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: [Content {
                parts: [TextPart { text: prompt }],
            }],
        };

        let fut = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send();

        let response = timeout(Duration::from_millis(self.settings.timeout_ms), fut)
            .await
            .map_err(|_| GeminiError::Timeout)?
            .map_err(|source| GeminiError::Request { source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(GeminiError::Status { status, body });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|source| GeminiError::Decode { source })?;

        extract_text(parsed).ok_or(GeminiError::EmptyResponse)
    }
}

/// Joins the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let text: String = response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
