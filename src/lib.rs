//! Structured-answer proxy for the TARS `/ask` endpoint.
//!
//! Every reply handed back to the client carries the three mandatory
//! sections (Issue Acknowledgement, Clarifying Question, Solution). Upstream
//! answers that break the contract are replaced by a deterministic template
//! chosen from the customer's issue, grounded in the Tally manual.

pub mod config;
pub mod engine;
pub mod llm;
pub mod postprocessing;
pub mod preprocessing;

pub use config::{ConfigError, ProxyConfig};
pub use engine::retrieval::{ManualCorpus, ManualRetriever, ManualSnippet};
pub use engine::{AskResponse, ErrorBody, Orchestrator, ProxyError};
pub use llm::{HttpUpstream, UpstreamClient, UpstreamError, UpstreamPayload};
pub use preprocessing::AskRequest;
