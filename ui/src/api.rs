//! API client for the Better Health server

use crate::types::{ChatReply, ChatRequest, ErrorBody};
use gloo_net::http::Request;
use std::fmt;

/// Used when the server is reached through the trunk dev server.
pub const DEV_API_BASE: &str = "http://localhost:8000";
const DEV_UI_PORT: &str = ":3000";

const FALLBACK_DETAIL: &str = "Failed to get response";

/// Which relay endpoint the chat page talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatEndpoint {
    Live,
    Custom,
    #[default]
    Mock,
}

impl ChatEndpoint {
    pub const ALL: [ChatEndpoint; 3] = [ChatEndpoint::Mock, ChatEndpoint::Live, ChatEndpoint::Custom];

    pub fn path(self) -> &'static str {
        match self {
            ChatEndpoint::Live => "/ai/chat",
            ChatEndpoint::Custom => "/ai/chat/custom",
            ChatEndpoint::Mock => "/ai/chat/mock",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ChatEndpoint::Live => "live",
            ChatEndpoint::Custom => "custom",
            ChatEndpoint::Mock => "mock",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChatEndpoint::Live => "Live model",
            ChatEndpoint::Custom => "Custom model",
            ChatEndpoint::Mock => "Demo replies",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    Status(String),
    /// The request never completed or the reply was unreadable.
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(detail) => write!(f, "Error: {}", detail),
            ApiError::Network(e) => write!(f, "Network error: {}", e),
        }
    }
}

/// Base URL for API calls. Same-origin unless the page is served by the
/// trunk dev server, or a base was baked in at build time.
pub fn resolve_api_base(origin: &str, build_override: Option<&str>) -> String {
    if let Some(base) = build_override.filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    if origin.ends_with(DEV_UI_PORT) {
        DEV_API_BASE.to_string()
    } else {
        String::new()
    }
}

pub fn api_base() -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    resolve_api_base(&origin, option_env!("BETTER_HEALTH_API_BASE"))
}

pub async fn send_chat(
    endpoint: ChatEndpoint,
    request: &ChatRequest,
    token: &str,
) -> Result<ChatReply, ApiError> {
    let url = format!("{}{}", api_base(), endpoint.path());
    tracing::debug!("POST {}", url);

    let resp = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        let detail = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| FALLBACK_DETAIL.to_string());
        return Err(ApiError::Status(detail));
    }

    resp.json::<ChatReply>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}
