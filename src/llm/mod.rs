//! # Upstream answering service
//!
//! The proxy treats the AI service as a black box that takes a question
//! (plus an optional image) and returns an answer string or fails.
//!
//! ```text
//! UpstreamPayload → send.rs (HTTP POST) → receive.rs (extract `answer`) → String
//! ```
//!
//! Only transport-level failures surface as [`UpstreamError`]; a body that
//! is not JSON or has no usable `answer` yields an empty string and is
//! repaired downstream.

pub mod receive;
pub mod send;

pub use receive::parse_answer;
pub use send::HttpUpstream;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Timeout after {seconds} seconds")]
    Timeout { seconds: f64 },

    #[error("Upstream rejected the request: {detail}")]
    Rejected { detail: String },

    #[error("Upstream error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Upstream request failed: {0}")]
    Transport(String),
}

/// Body POSTed to the upstream `/ask` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamPayload {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Anything that can answer a question: the real HTTP service or a test double.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn ask(&self, payload: &UpstreamPayload) -> Result<String, UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_is_omitted_when_absent() {
        let payload = UpstreamPayload {
            question: "q".into(),
            image: None,
        };
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"question":"q"}"#);
    }

    #[test]
    fn image_is_sent_when_present() {
        let payload = UpstreamPayload {
            question: "q".into(),
            image: Some("aGk=".into()),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"question": "q", "image": "aGk="})
        );
    }
}
