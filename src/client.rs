//! Outbound call to the captioning backend.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Shown when the backend answers successfully without a `caption` field.
pub const NO_CAPTION_MESSAGE: &str = "No caption generated.";

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ClientError {
    #[display("failed to reach caption backend: {source}")]
    Transport { source: reqwest::Error },
    #[display("caption backend returned {status}")]
    Status { status: StatusCode },
    #[display("caption backend sent an unreadable body: {source}")]
    Decode { source: reqwest::Error },
}

#[derive(Debug, Serialize)]
struct CaptionRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct CaptionReply {
    caption: Option<String>,
}

/// Posts prompts to one fixed backend endpoint.
#[derive(Debug, Clone)]
pub struct CaptionClient {
    endpoint: String,
    http: reqwest::Client,
}

impl CaptionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Requests a caption for `prompt`.
    ///
    /// Any non-2xx status is a failure. A 2xx reply without a `caption`
    /// string resolves to [`NO_CAPTION_MESSAGE`].
    #[instrument(skip(self, prompt), fields(endpoint = %self.endpoint, prompt_len = prompt.len()))]
    pub async fn request_caption(&self, prompt: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&CaptionRequest { prompt })
            .send()
            .await
            .map_err(|source| ClientError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status });
        }

        let reply: CaptionReply = response
            .json()
            .await
            .map_err(|source| ClientError::Decode { source })?;

        tracing::debug!(has_caption = reply.caption.is_some(), "caption backend replied");
        Ok(reply
            .caption
            .unwrap_or_else(|| NO_CAPTION_MESSAGE.to_string()))
    }
}
