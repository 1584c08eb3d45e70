use crate::{
    relay::mock,
    types::{ChatRequest, ChatResponse, ErrorDetail, HealthReport, RelayError},
    AppState,
};
use axum::{extract::State, Json};

/// Relay a message to the hosted model
#[utoipa::path(
    post,
    path = "/ai/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Model reply, or an apology carrying an `error` field", body = ChatResponse),
        (status = 408, description = "Model request timed out", body = ErrorDetail),
        (status = 503, description = "Model service unreachable", body = ErrorDetail),
        (status = "default", description = "Status passed through from the model service", body = ErrorDetail)
    ),
    tag = "ai"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, RelayError> {
    let reply = state.relay.chat(&payload).await?;
    Ok(Json(reply))
}

/// Relay a message using a chat-completions style payload
#[utoipa::path(
    post,
    path = "/ai/chat/custom",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Model reply, or an apology carrying an `error` field", body = ChatResponse)
    ),
    tag = "ai"
)]
pub async fn chat_custom(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    Json(state.relay.chat_custom(&payload).await)
}

/// Keyword-matched reply without calling the model
#[utoipa::path(
    post,
    path = "/ai/chat/mock",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Canned reply", body = ChatResponse)
    ),
    tag = "ai"
)]
pub async fn chat_mock(Json(payload): Json<ChatRequest>) -> Json<ChatResponse> {
    Json(mock::respond(&payload))
}

/// Probe the hosted model
#[utoipa::path(
    get,
    path = "/ai/health-check",
    responses(
        (status = 200, description = "Model availability", body = HealthReport)
    ),
    tag = "ai"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.relay.health_check().await)
}
