//! Integration tests for the assistant connector using wiremock.

use opsboard_connector_assistant::{Assistant, GENERIC_ACK};
use opsboard_core::{BearerToken, Connector, ConnectorError, FailureKind, Params};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn question() -> Params {
    Params::new().with("question", "How many invoices are overdue?")
}

#[tokio::test]
async fn call_posts_the_question() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/gpt"))
        .and(body_json(serde_json::json!({
            "question": "How many invoices are overdue?"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"reply": "Three."})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Assistant::new().base_url(mock_server.uri());
    let payload = client.call(question(), None).await.expect("should succeed");

    assert_eq!(payload, serde_json::json!("Three."));
}

#[tokio::test]
async fn context_prefix_is_prepended() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/gpt"))
        .and(body_json(serde_json::json!({
            "question": "Back-office dashboard: How many invoices are overdue?"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"reply": "Three."})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Assistant::new()
        .base_url(mock_server.uri())
        .context_prefix("Back-office dashboard: ");
    let result = client.call(question(), None).await;

    assert!(result.is_ok(), "expected Ok, got: {:?}", result.err());
}

#[tokio::test]
async fn response_field_shape_is_tolerated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/gpt"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "All clear."})),
        )
        .mount(&mock_server)
        .await;

    let client = Assistant::new().base_url(mock_server.uri());
    let payload = client.call(question(), None).await.expect("should succeed");

    assert_eq!(payload, serde_json::json!("All clear."));
}

#[tokio::test]
async fn bare_string_shape_is_tolerated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/gpt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!("Plain text.")))
        .mount(&mock_server)
        .await;

    let client = Assistant::new().base_url(mock_server.uri());
    let payload = client.call(question(), None).await.expect("should succeed");

    assert_eq!(payload, serde_json::json!("Plain text."));
}

#[tokio::test]
async fn unknown_shape_yields_the_acknowledgement() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/gpt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = Assistant::new().base_url(mock_server.uri());
    let payload = client.call(question(), None).await.expect("should succeed");

    assert_eq!(payload, serde_json::json!(GENERIC_ACK));
}

#[tokio::test]
async fn bearer_credential_is_attached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/gpt"))
        .and(header("authorization", "Bearer assist-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"reply": "ok"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Assistant::new().base_url(mock_server.uri());
    let token = BearerToken::new("assist-token");
    let result = client.call(question(), Some(&token)).await;

    assert!(result.is_ok(), "expected Ok, got: {:?}", result.err());
}

#[tokio::test]
async fn endpoint_failure_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/gpt"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model overloaded"))
        .mount(&mock_server)
        .await;

    let client = Assistant::new().base_url(mock_server.uri());
    let err = client.call(question(), None).await.unwrap_err();

    assert!(
        matches!(err, ConnectorError::Status { code: 500, .. }),
        "expected Status, got: {err:?}"
    );
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn non_json_body_is_a_protocol_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/gpt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("sorry, try later"))
        .mount(&mock_server)
        .await;

    let client = Assistant::new().base_url(mock_server.uri());
    let err = client.call(question(), None).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Protocol);
}
