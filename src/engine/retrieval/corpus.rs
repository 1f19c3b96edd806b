//! The Tally manual, loaded once at startup and read-only afterwards.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Manual file not readable: {0}")]
    Io(#[from] std::io::Error),
    #[error("Manual is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Manual has no `tutorials` array")]
    MissingTutorials,
}

/// One tutorial entry of the manual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub learning: String,
}

impl ManualDocument {
    pub fn new(title: impl Into<String>, learning: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            learning: learning.into(),
        }
    }
}

#[derive(Deserialize)]
struct ManualFile {
    tutorials: Option<Vec<ManualDocument>>,
}

/// Ordered, immutable collection of manual documents.
#[derive(Debug, Clone, Default)]
pub struct ManualCorpus {
    documents: Vec<ManualDocument>,
}

impl ManualCorpus {
    pub fn new(documents: Vec<ManualDocument>) -> Self {
        Self { documents }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses `{"tutorials": [{"title": .., "learning": ..}]}`.
    pub fn from_json_str(raw: &str) -> Result<Self, CorpusError> {
        let parsed: ManualFile = serde_json::from_str(raw)?;
        let documents = parsed.tutorials.ok_or(CorpusError::MissingTutorials)?;
        Ok(Self { documents })
    }

    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Loads the manual, degrading to an empty corpus on any failure.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path.as_ref()) {
            Ok(corpus) => {
                info!(tutorials = corpus.len(), "Manual loaded");
                corpus
            }
            Err(CorpusError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Manual file not found, skipping manual grounding");
                Self::empty()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load manual, skipping manual grounding");
                Self::empty()
            }
        }
    }

    pub fn documents(&self) -> &[ManualDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
