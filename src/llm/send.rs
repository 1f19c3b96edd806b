use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::receive::parse_answer;
use super::{UpstreamClient, UpstreamError, UpstreamPayload};

/// reqwest-backed client for the upstream `/ask` endpoint. One attempt per
/// call; retry policy belongs to the caller.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpUpstream {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tars-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    fn map_reqwest_error(&self, e: reqwest::Error) -> UpstreamError {
        if e.is_timeout() {
            UpstreamError::Timeout {
                seconds: self.timeout.as_secs_f64(),
            }
        } else if e.is_connect() {
            UpstreamError::Transport(format!("Connection error - unable to reach upstream: {}", e))
        } else {
            UpstreamError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    #[instrument(skip_all, fields(url = %self.url))]
    async fn ask(&self, payload: &UpstreamPayload) -> Result<String, UpstreamError> {
        debug!(
            question_chars = payload.question.chars().count(),
            has_image = payload.image.is_some(),
            "Sending upstream payload"
        );

        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        info!(status = status.as_u16(), "Upstream responded");

        let body = response
            .text()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        match status {
            s if s.is_success() => Ok(parse_answer(&body)),
            StatusCode::UNPROCESSABLE_ENTITY => Err(UpstreamError::Rejected { detail: body }),
            s => Err(UpstreamError::Status {
                status: s.as_u16(),
                body,
            }),
        }
    }
}
