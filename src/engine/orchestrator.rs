//! High-level coordinator: request → issue → manual → upstream → contract.

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn, Instrument};
use uuid::Uuid;

use crate::engine::output::attach_grounding;
use crate::engine::retrieval::{ManualCorpus, ManualRetriever};
use crate::engine::types::{AskResponse, ProxyError};
use crate::llm::{UpstreamClient, UpstreamPayload};
use crate::postprocessing::normalize_response;
use crate::preprocessing::{extract_issue, AskRequest};

pub struct Orchestrator {
    retriever: ManualRetriever,
    upstream: Arc<dyn UpstreamClient>,
    timeout: Duration,
}

impl Orchestrator {
    pub fn new(
        corpus: Arc<ManualCorpus>,
        upstream: Arc<dyn UpstreamClient>,
        timeout: Duration,
    ) -> Self {
        Self {
            retriever: ManualRetriever::new(corpus),
            upstream,
            timeout,
        }
    }

    /// Drive one `/ask` request. Only upstream transport failures are
    /// returned as errors; bad answers are repaired.
    pub async fn handle(&self, request: &AskRequest) -> Result<AskResponse, ProxyError> {
        let request_id = Uuid::new_v4();
        self.handle_inner(request)
            .instrument(tracing::info_span!("ask", %request_id))
            .await
    }

    #[instrument(skip_all)]
    async fn handle_inner(&self, request: &AskRequest) -> Result<AskResponse, ProxyError> {
        let issue = extract_issue(request);
        let snippet = self.retriever.search(Some(&issue));
        info!(
            issue = %issue,
            manual = snippet.as_ref().map(|s| s.title.as_str()),
            "Issue extracted"
        );

        let payload = UpstreamPayload {
            question: attach_grounding(request.effective_question(), snippet.as_ref()),
            image: request.image().map(str::to_string),
        };

        let raw = match tokio::time::timeout(self.timeout, self.upstream.ask(&payload)).await {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                warn!(error = %e, "Upstream call failed");
                return Err(e.into());
            }
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs_f64(), "Upstream call timed out");
                return Err(ProxyError::UpstreamTimeout {
                    seconds: self.timeout.as_secs_f64(),
                });
            }
        };

        let normalized = normalize_response(&issue, &raw, snippet.as_ref());
        if let Some(category) = normalized.synthesized {
            info!(%category, "Returned synthesized answer");
        }

        Ok(AskResponse {
            answer: normalized.answer,
        })
    }
}
