use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= Relay Request/Response Types =============

/// Body accepted by every `/ai/chat*` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    /// Prior turns supplied by the client. Forwarded as-is, never stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_history: Option<Vec<HistoryEntry>>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            conversation_history: None,
        }
    }

    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.conversation_history = Some(history);
        self
    }

    /// History as a slice; a missing history is the same as an empty one.
    pub fn history(&self) -> &[HistoryEntry] {
        self.conversation_history.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub role: MessageRole,
    pub content: String,
}

impl HistoryEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// Reply returned by the chat endpoints.
///
/// `conversation_id` and `timestamp` are always present in the JSON (possibly
/// `null`); `error` only appears on degraded replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_id: Option<String>,
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    /// A 200 reply that stands in for a failed upstream call.
    pub fn degraded(response: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            conversation_id: None,
            timestamp: Some(now_timestamp()),
            error: Some(error.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Current UTC time as an RFC 3339 string with a `Z` suffix.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ============= Health Types =============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AiServiceState {
    Responsive,
    RespondingWithErrors,
    Offline,
}

/// Body of `GET /ai/health-check`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub ai_service: AiServiceState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            ai_service: AiServiceState::Responsive,
            error: None,
        }
    }

    pub fn degraded() -> Self {
        Self {
            status: HealthStatus::Degraded,
            ai_service: AiServiceState::RespondingWithErrors,
            error: None,
        }
    }

    pub fn unavailable(error: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unavailable,
            ai_service: AiServiceState::Offline,
            error: Some(error.into()),
        }
    }
}

// ============= Status Types =============

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiStatus {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceHealth {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeInfo {
    pub message: String,
    pub features: Vec<String>,
}

/// Error body for relay failures that propagate as HTTP errors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

// ============= Error Types =============

/// Failures of a single outbound model call.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Model request timeout - please try again")]
    RemoteTimeout,

    #[error("Cannot connect to AI model service")]
    RemoteUnreachable(String),

    #[error("{message}")]
    RemoteStatus { status: u16, message: String },

    #[error("{0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Unexpected(String),
}

impl RelayError {
    /// Whether this failure is reported to the caller as an HTTP error
    /// instead of being folded into a degraded 200 reply.
    pub fn propagates(&self) -> bool {
        matches!(
            self,
            RelayError::RemoteTimeout
                | RelayError::RemoteUnreachable(_)
                | RelayError::RemoteStatus { .. }
        )
    }

    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;

        match self {
            RelayError::RemoteTimeout => StatusCode::REQUEST_TIMEOUT,
            RelayError::RemoteUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::RemoteStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::MalformedResponse(_) | RelayError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl axum::response::IntoResponse for RelayError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = ErrorDetail {
            detail: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({
            "message": "An internal server error occurred",
            "error": self.to_string(),
        });

        (axum::http::StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
