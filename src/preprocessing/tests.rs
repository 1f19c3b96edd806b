use super::*;
use std::collections::HashMap;

fn with_persona(question: &str, persona: &str) -> AskRequest {
    AskRequest {
        question: question.into(),
        persona_prompt: Some(persona.into()),
        ..Default::default()
    }
}

fn with_fields(pairs: &[(&str, &str)]) -> AskRequest {
    let field_values: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AskRequest {
        question: "please help me with this screen, nothing here names the problem".into(),
        context: Some(ScreenContext {
            screen_name: Some("Sales Voucher".into()),
            active_field: None,
            field_values,
        }),
        ..Default::default()
    }
}

#[test]
fn marker_in_question_wins() {
    let request = with_persona(
        "You are a support coach.\nCustomer issue:   GST   mismatch\n in voucher 102 :",
        "Customer issue: something else entirely",
    );
    assert_eq!(extract_issue(&request), "GST mismatch in voucher 102");
}

#[test]
fn marker_is_case_insensitive() {
    let request = AskRequest::new("noise noise CUSTOMER ISSUE: Tally not opening");
    assert_eq!(extract_issue(&request), "Tally not opening");
}

#[test]
fn marker_in_persona_used_when_question_has_none() {
    let request = with_persona(
        "how do I fix this?",
        "You are TARS, a long-winded persona prompt.\nCustomer issue: Invoice creation failure.",
    );
    assert_eq!(extract_issue(&request), "Invoice creation failure.");
}

#[test]
fn empty_marker_falls_through() {
    let request = with_persona("Customer issue:   \n ", "Stock summary not updating");
    assert_eq!(extract_issue(&request), "Stock summary not updating");
}

#[test]
fn short_persona_is_the_issue() {
    let request = with_persona("how to print", "  Ledger balance   wrong:  ");
    assert_eq!(extract_issue(&request), "Ledger balance wrong");
}

#[test]
fn long_persona_is_ignored() {
    let persona = "You are a friendly and patient assistant who helps small business owners \
                   with every kind of accounting question they might possibly have today";
    assert!(persona.split_whitespace().count() > 16);
    let request = with_persona("how to print", persona);
    assert_eq!(extract_issue(&request), DEFAULT_ISSUE_SUMMARY);
}

#[test]
fn persona_with_exactly_sixteen_words_is_used() {
    let persona = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen";
    let request = with_persona("q", persona);
    assert_eq!(extract_issue(&request), persona);
}

#[test]
fn field_values_checked_in_order() {
    let request = with_fields(&[
        ("summary", "summary text"),
        ("title", "  Bank  reconciliation stuck "),
        ("issue", "   "),
    ]);
    assert_eq!(extract_issue(&request), "Bank reconciliation stuck");
}

#[test]
fn unknown_fields_are_ignored() {
    let request = with_fields(&[("voucher_no", "102")]);
    assert_eq!(extract_issue(&request), DEFAULT_ISSUE_SUMMARY);
}

#[test]
fn empty_request_yields_placeholder() {
    assert_eq!(extract_issue(&AskRequest::default()), "your issue");
}

#[test]
fn customer_issue_alias_feeds_marker_search() {
    let request: AskRequest = serde_json::from_str(
        r#"{"customer_issue": "Customer issue: Tally not opening on startup", "ticket_id": 12345, "auto_coach": true}"#,
    )
    .unwrap();
    assert_eq!(request.effective_question(), "Customer issue: Tally not opening on startup");
    assert_eq!(extract_issue(&request), "Tally not opening on startup");
}

#[test]
fn request_accepts_image_alias_and_ignores_unknown_fields() {
    let request: AskRequest = serde_json::from_str(
        r#"{"question": "q", "image": "aGVsbG8=", "extra": 1, "context": {"screen_name": "Startup"}}"#,
    )
    .unwrap();
    assert_eq!(request.image(), Some("aGVsbG8="));
    assert!(request.field_values().is_none());
    assert_eq!(
        request.context.and_then(|c| c.screen_name).as_deref(),
        Some("Startup")
    );
}

#[test]
fn blank_image_is_dropped() {
    let request = AskRequest {
        image_base64: Some("  ".into()),
        ..AskRequest::new("q")
    };
    assert!(request.image().is_none());
}
