//! Outbound model client abstraction
//!
//! The relay never talks to `reqwest` directly; it goes through [`ModelClient`]
//! so the transport can be swapped (tests use a scripted client).

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Why an outbound call produced no HTTP response at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The call did not complete within the allotted time.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The remote host refused or could not be reached.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Anything else (TLS, protocol, body decoding).
    #[error("{0}")]
    Other(String),
}

/// Raw HTTP response from the model endpoint.
///
/// The body is kept as text because the remote schema is not fixed; callers
/// decide how (and whether) to parse it.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: String,
}

impl RemoteResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only an exact 200 counts as success.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// A single-shot JSON POST to the external model.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// POST `payload` and return whatever status and body come back.
    ///
    /// Non-2xx statuses are *not* errors at this layer.
    async fn post_json(
        &self,
        payload: &Value,
        timeout: Duration,
    ) -> Result<RemoteResponse, TransportError>;

    /// URL the client posts to, for logs and diagnostics.
    fn endpoint(&self) -> &str;
}
