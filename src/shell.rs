//! Page state and the caption submission flow.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{instrument, Instrument};

use crate::client::{CaptionClient, ClientError};
use crate::formatter::{format_caption, Block};

/// The only failure text the page ever shows.
pub const FAILURE_MESSAGE: &str = "Failed to generate caption.";

/// Transient state of one page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub prompt: String,
    pub caption: String,
    pub loading: bool,
    pub error: String,
}

impl PageState {
    /// Mirrors the disabled state of the generate button.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.prompt.is_empty()
    }

    pub fn caption_blocks(&self) -> Vec<Block> {
        format_caption(self.caption.as_str())
    }

    fn begin_attempt(&mut self) {
        self.loading = true;
        self.caption.clear();
        self.error.clear();
    }

    fn finish_attempt(&mut self, outcome: Result<String, ClientError>) {
        match outcome {
            Ok(caption) => self.caption = caption,
            Err(err) => {
                tracing::warn!(error = %err, "caption request failed");
                self.error = FAILURE_MESSAGE.to_string();
            }
        }
        self.loading = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SubmitRejection {
    #[display("a caption request is already in flight")]
    InFlight,
    #[display("prompt is empty")]
    EmptyPrompt,
}

/// Owns the page state and issues at most one caption request at a time.
#[derive(Debug)]
pub struct Shell {
    page: Arc<Mutex<PageState>>,
    client: CaptionClient,
}

impl Shell {
    pub fn new(client: CaptionClient) -> Self {
        Self {
            page: Arc::new(Mutex::new(PageState::default())),
            client,
        }
    }

    pub async fn snapshot(&self) -> PageState {
        self.page.lock().await.clone()
    }

    /// Stores `prompt` and runs one caption attempt with it.
    ///
    /// The attempt runs as its own task and the lock is released while the
    /// request is outstanding, so readers see `loading == true` until the
    /// attempt settles. Dropping the returned future does not cancel the
    /// attempt; it still settles and clears `loading`.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn submit(&self, prompt: String) -> Result<PageState, SubmitRejection> {
        let prompt = {
            let mut page = self.page.lock().await;
            if page.loading {
                return Err(SubmitRejection::InFlight);
            }
            page.prompt = prompt;
            if !page.can_submit() {
                return Err(SubmitRejection::EmptyPrompt);
            }
            page.begin_attempt();
            page.prompt.clone()
        };

        let attempt = tokio::spawn(
            generate_caption(Arc::clone(&self.page), self.client.clone(), prompt)
                .in_current_span(),
        );

        match attempt.await {
            Ok(page) => Ok(page),
            Err(err) => {
                tracing::error!(error = %err, "caption attempt did not settle");
                let mut page = self.page.lock().await;
                page.loading = false;
                page.error = FAILURE_MESSAGE.to_string();
                Ok(page.clone())
            }
        }
    }
}

async fn generate_caption(
    page: Arc<Mutex<PageState>>,
    client: CaptionClient,
    prompt: String,
) -> PageState {
    tracing::info!(endpoint = client.endpoint(), "requesting caption");
    let outcome = client.request_caption(&prompt).await;

    let mut page = page.lock().await;
    page.finish_attempt(outcome);
    page.clone()
}
