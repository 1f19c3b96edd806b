use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::cleaner::Cleaner;

/// Structured hint about which screen the customer is looking at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenContext {
    #[serde(default)]
    pub screen_name: Option<String>,
    #[serde(default)]
    pub active_field: Option<String>,
    #[serde(default)]
    pub field_values: HashMap<String, String>,
}

/// Inbound `/ask` payload.
///
/// `ticket_id` and `auto_coach` are carried for the routing layer only and
/// never influence normalisation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub customer_issue: Option<String>,
    #[serde(default)]
    pub persona_prompt: Option<String>,
    #[serde(default, alias = "image")]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub context: Option<ScreenContext>,
    #[serde(default)]
    pub ticket_id: Option<serde_json::Value>,
    #[serde(default)]
    pub auto_coach: Option<bool>,
}

impl AskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Default::default()
        }
    }

    /// The question to forward upstream: `question`, or the
    /// `customer_issue` alias when the question is blank.
    pub fn effective_question(&self) -> &str {
        if !Cleaner::is_blank(&self.question) {
            return &self.question;
        }
        match self.customer_issue.as_deref() {
            Some(issue) if !Cleaner::is_blank(issue) => issue,
            _ => &self.question,
        }
    }

    /// Image payload, ignoring blank strings.
    pub fn image(&self) -> Option<&str> {
        self.image_base64
            .as_deref()
            .filter(|image| !Cleaner::is_blank(image))
    }

    pub fn field_values(&self) -> Option<&HashMap<String, String>> {
        self.context
            .as_ref()
            .map(|ctx| &ctx.field_values)
            .filter(|values| !values.is_empty())
    }
}
