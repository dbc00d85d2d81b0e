//! Integration tests for the gateway connector using wiremock.

use opsboard_connector_gateway::{Gateway, DEFAULT_CURRENCY};
use opsboard_core::{BearerToken, Connector, ConnectorError, FailureKind, Params};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payment_params() -> Params {
    Params::new()
        .with("recipient", "DE0012345678901234")
        .with("amount", 100)
        .with("currency", "EUR")
}

#[tokio::test]
async fn call_posts_the_payment_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/payments"))
        .and(body_json(serde_json::json!({
            "recipient": "DE0012345678901234",
            "amount": 100,
            "currency": "EUR",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ok", "amount": 100})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Gateway::new().base_url(mock_server.uri());
    let payload = client
        .call(payment_params(), None)
        .await
        .expect("should succeed");

    assert_eq!(payload, serde_json::json!({"status": "ok", "amount": 100}));
}

#[tokio::test]
async fn missing_currency_defaults_to_eur() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/payments"))
        .and(body_json(serde_json::json!({
            "recipient": "DE0012345678901234",
            "amount": 100,
            "currency": DEFAULT_CURRENCY,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Gateway::new().base_url(mock_server.uri());
    let params = Params::new()
        .with("recipient", "DE0012345678901234")
        .with("amount", 100);
    let result = client.call(params, None).await;

    assert!(result.is_ok(), "expected Ok, got: {:?}", result.err());
}

#[tokio::test]
async fn explicit_currency_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/payments"))
        .and(body_json(serde_json::json!({
            "recipient": "DE0012345678901234",
            "amount": 100,
            "currency": "CHF",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Gateway::new().base_url(mock_server.uri());
    let params = payment_params().with("currency", "CHF");
    let result = client.call(params, None).await;

    assert!(result.is_ok(), "expected Ok, got: {:?}", result.err());
}

#[tokio::test]
async fn bearer_credential_is_attached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/payments"))
        .and(header("authorization", "Bearer pay-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Gateway::new().base_url(mock_server.uri());
    let token = BearerToken::new("pay-token");
    let result = client.call(payment_params(), Some(&token)).await;

    assert!(result.is_ok(), "expected Ok, got: {:?}", result.err());
}

#[tokio::test]
async fn gateway_rejection_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/payments"))
        .respond_with(ResponseTemplate::new(402).set_body_string("insufficient funds"))
        .mount(&mock_server)
        .await;

    let client = Gateway::new().base_url(mock_server.uri());
    let err = client.call(payment_params(), None).await.unwrap_err();

    assert!(
        matches!(err, ConnectorError::Status { code: 402, .. }),
        "expected Status, got: {err:?}"
    );
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn non_json_body_is_a_protocol_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&mock_server)
        .await;

    let client = Gateway::new().base_url(mock_server.uri());
    let err = client.call(payment_params(), None).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Protocol);
}
