//! Response-shape tolerance for assistant replies.

use serde_json::Value;

/// Fixed acknowledgement used when the reply shape is unrecognized.
///
/// An unrecognized shape is still a success: the collaborator answered, it
/// just did not use a known field. The placeholder keeps the display layer
/// from rendering raw JSON.
pub const GENERIC_ACK: &str = "Request received.";

/// Extract the assistant's reply text from a loosely-specified response.
///
/// Accepted shapes, in order: `{"reply": string}`, `{"response": string}`,
/// a bare JSON string. Anything else yields [`GENERIC_ACK`].
pub fn extract_reply(body: &Value) -> String {
    if let Value::String(text) = body {
        return text.clone();
    }
    if let Some(text) = body.get("reply").and_then(Value::as_str) {
        return text.to_string();
    }
    if let Some(text) = body.get("response").and_then(Value::as_str) {
        return text.to_string();
    }
    GENERIC_ACK.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_field_is_used() {
        let body = serde_json::json!({"reply": "x"});
        assert_eq!(extract_reply(&body), "x");
    }

    #[test]
    fn response_field_is_used() {
        let body = serde_json::json!({"response": "y"});
        assert_eq!(extract_reply(&body), "y");
    }

    #[test]
    fn bare_string_is_used() {
        let body = serde_json::json!("z");
        assert_eq!(extract_reply(&body), "z");
    }

    #[test]
    fn unknown_shape_yields_the_acknowledgement() {
        assert_eq!(extract_reply(&serde_json::json!({})), GENERIC_ACK);
        assert_eq!(extract_reply(&serde_json::json!({"answer": "a"})), GENERIC_ACK);
        assert_eq!(extract_reply(&serde_json::json!(42)), GENERIC_ACK);
        assert_eq!(extract_reply(&serde_json::json!(["x"])), GENERIC_ACK);
    }

    #[test]
    fn reply_wins_over_response() {
        let body = serde_json::json!({"reply": "first", "response": "second"});
        assert_eq!(extract_reply(&body), "first");
    }

    #[test]
    fn non_string_reply_falls_through_to_response() {
        let body = serde_json::json!({"reply": 5, "response": "spoken"});
        assert_eq!(extract_reply(&body), "spoken");
    }
}
