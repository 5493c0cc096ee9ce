//! HTTP client for the remote chapter summary service
//!
//! `POST {endpoint}/summaries` with `{bookId, chapter}` answers
//! `{summary, generatedAt}`. The application works without it.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::{
    domain::ai::{AiSummaryRequest, AiSummaryResponse},
    infrastructure::config::AiConfig,
};

#[derive(Debug, Error)]
pub enum AiClientError {
    #[error("AI service is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service answered {status}")]
    Status { status: u16 },
}

#[derive(Debug, Clone)]
pub struct AiClient {
    client: Client,
    base_url: String,
}

impl AiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AiClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AiConfig) -> Result<Self, AiClientError> {
        let endpoint = config
            .endpoint
            .as_deref()
            .ok_or(AiClientError::NotConfigured)?;
        Self::new(endpoint, Duration::from_secs(config.timeout_secs))
    }

    pub fn summaries_url(&self) -> String {
        format!("{}/summaries", self.base_url)
    }

    pub async fn chapter_summary(
        &self,
        request: &AiSummaryRequest,
    ) -> Result<AiSummaryResponse, AiClientError> {
        log::debug!(
            "requesting summary for {} chapter {}",
            request.book_id,
            request.chapter
        );
        let response = self
            .client
            .post(self.summaries_url())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiClientError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<AiSummaryResponse>().await?)
    }
}
