use serde_json::Value;
use tracing::warn;

/// Pulls a trimmed `answer` string out of an upstream response body.
///
/// Non-JSON bodies, a missing or non-string `answer`, and blank answers
/// all come back as an empty string.
pub fn parse_answer(body: &str) -> String {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Upstream response was not valid JSON");
            return String::new();
        }
    };

    match value.get("answer").and_then(Value::as_str) {
        Some(answer) => answer.trim().to_string(),
        None => {
            warn!("Upstream response had no string `answer` field");
            String::new()
        }
    }
}
