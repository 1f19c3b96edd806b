//! Shared structs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm::UpstreamError;

/// Body returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Failures the client is allowed to see. Everything else is repaired locally.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream timed out after {seconds}s")]
    UpstreamTimeout { seconds: f64 },
    #[error("upstream rejected the request: {0}")]
    UpstreamRejected(String),
    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("upstream unreachable: {0}")]
    UpstreamUnavailable(String),
}

impl ProxyError {
    /// HTTP status the boundary layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::UpstreamTimeout { .. } => 504,
            Self::UpstreamRejected(_) => 400,
            Self::UpstreamStatus { .. } | Self::UpstreamUnavailable(_) => 502,
        }
    }

    /// Client-facing message.
    pub fn detail(&self) -> String {
        match self {
            Self::UpstreamTimeout { .. } => {
                "The AI is taking longer than expected to respond. Please try again shortly.".to_string()
            }
            Self::UpstreamRejected(detail) => {
                format!("Upstream could not process the question: {}", detail)
            }
            Self::UpstreamStatus { status, body } => format!("Upstream error {}: {}", status, body),
            Self::UpstreamUnavailable(msg) => format!("Upstream request failed: {}", msg),
        }
    }
}

impl From<UpstreamError> for ProxyError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Timeout { seconds } => Self::UpstreamTimeout { seconds },
            UpstreamError::Rejected { detail } => Self::UpstreamRejected(detail),
            UpstreamError::Status { status, body } => Self::UpstreamStatus { status, body },
            UpstreamError::Transport(msg) => Self::UpstreamUnavailable(msg),
        }
    }
}

/// Error body rendered by the boundary layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub detail: String,
}

impl From<&ProxyError> for ErrorBody {
    fn from(err: &ProxyError) -> Self {
        Self {
            status: err.status_code(),
            detail: err.detail(),
        }
    }
}
