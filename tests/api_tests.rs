mod common;

use axum::http::{Method, StatusCode};
use better_health::llm::{RemoteResponse, TransportError};
use common::mocks::ScriptedModelClient;
use common::test_server_with;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

fn history(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            let role = if i % 2 == 0 { "user" } else { "assistant" };
            json!({"role": role, "content": format!("turn {}", i)})
        })
        .collect()
}

// ============= Status Endpoints =============

#[tokio::test]
async fn test_api_root() {
    let server = test_server_with(Arc::new(ScriptedModelClient::new(vec![])));

    let response = server.get("/api/").await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "Health AI Assistant API", "status": "healthy"}));
}

#[tokio::test]
async fn test_service_health() {
    let server = test_server_with(Arc::new(ScriptedModelClient::new(vec![])));

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Health AI Backend");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_home_lists_features() {
    let server = test_server_with(Arc::new(ScriptedModelClient::new(vec![])));

    let response = server.get("/api/home").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Welcome to Health AI 👋");
    assert_eq!(body["features"].as_array().unwrap().len(), 4);
    assert_eq!(body["features"][0], "AI Health Assistant");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let server = test_server_with(Arc::new(ScriptedModelClient::new(vec![])));

    let response = server.get("/api/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["paths"]["/ai/chat"].is_object());
}

#[cfg(not(feature = "ui"))]
#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = test_server_with(Arc::new(ScriptedModelClient::new(vec![])));

    let response = server.get("/does/not/exist").await;

    response.assert_status_not_found();
    response.assert_json(&json!({"detail": "Not Found"}));
}

// ============= Mock Endpoint =============

#[tokio::test]
async fn test_mock_greeting_wins_over_headache() {
    let client = Arc::new(ScriptedModelClient::new(vec![]));
    let server = test_server_with(client.clone());

    let response = server
        .post("/ai/chat/mock")
        .json(&json!({"message": "Hello, I have a headache"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["response"].as_str().unwrap().starts_with("Hello! I'm your Health AI assistant."));
    assert_eq!(body["conversation_id"], "mock_conversation_123");
    assert!(body["timestamp"].is_string());
    assert!(client.payloads().is_empty(), "mock must not call the model");
}

#[tokio::test]
async fn test_mock_fallback_echoes_message() {
    let server = test_server_with(Arc::new(ScriptedModelClient::new(vec![])));

    let response = server
        .post("/ai/chat/mock")
        .json(&json!({"message": "blood pressure", "conversation_history": history(2)}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Thank you for your message about 'blood pressure'."));
}

#[tokio::test]
async fn test_missing_message_is_rejected() {
    let server = test_server_with(Arc::new(ScriptedModelClient::new(vec![])));

    let response = server
        .post("/ai/chat/mock")
        .json(&json!({"conversation_history": []}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

// ============= Flat Relay =============

#[tokio::test]
async fn test_chat_extracts_answer_field() {
    let client = Arc::new(ScriptedModelClient::replying(json!({"answer": "X"})));
    let server = test_server_with(client.clone());

    let response = server
        .post("/ai/chat")
        .json(&json!({"message": "How much water should I drink?"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["response"], "X");
    assert!(body["conversation_id"].is_null());
    assert!(body.get("error").is_none());
    assert_eq!(client.timeouts(), vec![Duration::from_secs(30)]);
}

#[tokio::test]
async fn test_chat_forwards_only_last_six_history_entries() {
    let client = Arc::new(ScriptedModelClient::replying(json!({"response": "ok"})));
    let server = test_server_with(client.clone());

    server
        .post("/ai/chat")
        .json(&json!({"message": "next", "conversation_history": history(10)}))
        .await
        .assert_status_ok();

    let payloads = client.payloads();
    let forwarded = payloads[0]["conversation_history"].as_array().unwrap();
    assert_eq!(forwarded.len(), 6);
    assert_eq!(forwarded[0]["content"], "turn 4");
    assert_eq!(forwarded[5]["content"], "turn 9");
    assert_eq!(payloads[0]["message"], "next");
    assert_eq!(payloads[0]["max_tokens"], 500);
    assert!(payloads[0]["system_prompt"]
        .as_str()
        .unwrap()
        .contains("helpful AI health assistant"));
}

#[tokio::test]
async fn test_chat_propagates_remote_status_and_message() {
    let client = Arc::new(ScriptedModelClient::status(404, r#"{"error": "not found"}"#));
    let server = test_server_with(client);

    let response = server.post("/ai/chat").json(&json!({"message": "hi"})).await;

    response.assert_status_not_found();
    response.assert_json(&json!({"detail": "not found"}));
}

#[tokio::test]
async fn test_chat_generic_message_for_non_json_error_body() {
    let client = Arc::new(ScriptedModelClient::status(502, "<html>Bad Gateway</html>"));
    let server = test_server_with(client);

    let response = server.post("/ai/chat").json(&json!({"message": "hi"})).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    response.assert_json(&json!({"detail": "Model API returned status 502"}));
}

#[tokio::test]
async fn test_chat_timeout_is_408() {
    let client = Arc::new(ScriptedModelClient::failing(TransportError::Timeout(
        Duration::from_secs(30),
    )));
    let server = test_server_with(client);

    let response = server.post("/ai/chat").json(&json!({"message": "hi"})).await;

    response.assert_status(StatusCode::REQUEST_TIMEOUT);
    response.assert_json(&json!({"detail": "Model request timeout - please try again"}));
}

#[tokio::test]
async fn test_chat_connection_failure_is_503() {
    let client = Arc::new(ScriptedModelClient::failing(TransportError::Connect(
        "connection refused".to_string(),
    )));
    let server = test_server_with(client);

    let response = server.post("/ai/chat").json(&json!({"message": "hi"})).await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    response.assert_json(&json!({"detail": "Cannot connect to AI model service"}));
}

#[tokio::test]
async fn test_chat_without_reply_field_apologizes() {
    let client = Arc::new(ScriptedModelClient::replying(json!({"result": "wrong field"})));
    let server = test_server_with(client);

    let response = server.post("/ai/chat").json(&json!({"message": "hi"})).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], "AI service temporarily unavailable");
    let text = body["response"].as_str().unwrap();
    assert!(text.starts_with("I understand you're asking about health-related matters."));
    assert!(text.ends_with("(Error: No response found in model output)"));
}

#[tokio::test]
async fn test_chat_unclassified_transport_failure_apologizes() {
    let client = Arc::new(ScriptedModelClient::failing(TransportError::Other(
        "invalid certificate".to_string(),
    )));
    let server = test_server_with(client);

    let response = server.post("/ai/chat").json(&json!({"message": "hi"})).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], "AI service temporarily unavailable");
}

// ============= Custom Relay =============

#[tokio::test]
async fn test_custom_reads_first_choice() {
    let client = Arc::new(ScriptedModelClient::replying(json!({
        "id": "chatcmpl-42",
        "created": 1700000000,
        "choices": [{"message": {"role": "assistant", "content": "Try a short walk."}}]
    })));
    let server = test_server_with(client.clone());

    let response = server
        .post("/ai/chat/custom")
        .json(&json!({"message": "I feel stiff", "conversation_history": history(8)}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["response"], "Try a short walk.");
    assert_eq!(body["conversation_id"], "chatcmpl-42");
    assert_eq!(body["timestamp"], "1700000000");

    let messages = client.payloads()[0]["messages"].as_array().unwrap().clone();
    assert_eq!(messages.len(), 8);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["content"], "turn 2");
    assert_eq!(messages[7]["content"], "I feel stiff");
}

#[tokio::test]
async fn test_custom_empty_reply_uses_placeholder_text() {
    let client = Arc::new(ScriptedModelClient::replying(json!({"choices": []})));
    let server = test_server_with(client);

    let response = server.post("/ai/chat/custom").json(&json!({"message": "hi"})).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["response"],
        "I received your message but couldn't generate a proper response."
    );
}

#[rstest::rstest]
#[case::choice_without_content(json!({"choices": [{"message": {}}], "text": "stray text"}))]
#[case::missing_choices(json!({"text": "stray text"}))]
#[tokio::test]
async fn test_custom_text_fields_need_empty_choices(#[case] body: Value) {
    let client = Arc::new(ScriptedModelClient::replying(body));
    let server = test_server_with(client);

    let response = server.post("/ai/chat/custom").json(&json!({"message": "hi"})).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["response"],
        "I received your message but couldn't generate a proper response."
    );
}

#[rstest::rstest]
#[case::remote_error(Ok(RemoteResponse::new(500, "boom")), "Model API error: boom")]
#[case::timeout(
    Err(TransportError::Timeout(Duration::from_secs(30))),
    "Model request timeout - please try again"
)]
#[case::refused(
    Err(TransportError::Connect("refused".to_string())),
    "Cannot connect to AI model service"
)]
#[tokio::test]
async fn test_custom_always_answers_200(
    #[case] outcome: Result<RemoteResponse, TransportError>,
    #[case] expected_error: &str,
) {
    let client = Arc::new(ScriptedModelClient::new(vec![outcome]));
    let server = test_server_with(client);

    let response = server.post("/ai/chat/custom").json(&json!({"message": "hi"})).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["response"],
        "I'm having trouble connecting to my AI capabilities right now. Please try again in a moment."
    );
    assert_eq!(body["error"], expected_error);
}

// ============= Health Check =============

#[tokio::test]
async fn test_health_check_healthy() {
    let client = Arc::new(ScriptedModelClient::replying(json!({"response": "pong"})));
    let server = test_server_with(client.clone());

    let response = server.get("/ai/health-check").await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "healthy", "ai_service": "responsive"}));
    assert_eq!(
        client.payloads()[0],
        json!({"message": "Test connection", "max_tokens": 10})
    );
    assert_eq!(client.timeouts(), vec![Duration::from_secs(10)]);
}

#[tokio::test]
async fn test_health_check_degraded() {
    let client = Arc::new(ScriptedModelClient::status(500, "oops"));
    let server = test_server_with(client);

    let response = server.get("/ai/health-check").await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "degraded", "ai_service": "responding_with_errors"}));
}

#[tokio::test]
async fn test_health_check_unavailable() {
    let client = Arc::new(ScriptedModelClient::failing(TransportError::Connect(
        "refused".to_string(),
    )));
    let server = test_server_with(client);

    let response = server.get("/ai/health-check").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["ai_service"], "offline");
    assert_eq!(body["error"], "connection failed: refused");
}

// ============= CORS =============

#[tokio::test]
async fn test_cors_preflight_allows_local_origin() {
    let server = test_server_with(Arc::new(ScriptedModelClient::new(vec![])));

    let response = server
        .method(Method::OPTIONS, "/ai/chat")
        .add_header("Origin", "http://localhost:3000")
        .add_header("Access-Control-Request-Method", "POST")
        .add_header("Access-Control-Request-Headers", "content-type,authorization")
        .await;

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
    assert!(headers
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("POST"));
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let server = test_server_with(Arc::new(ScriptedModelClient::new(vec![])));

    let response = server
        .get("/api/health")
        .add_header("Origin", "http://evil.example")
        .await;

    response.assert_status_ok();
    assert!(response.headers().get("access-control-allow-origin").is_none());
}
