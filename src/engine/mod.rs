//! Public façade for the engine layer.

pub mod orchestrator;
pub mod output;
pub mod retrieval;
pub mod types;

pub use orchestrator::Orchestrator;
pub use types::{AskResponse, ErrorBody, ProxyError};
