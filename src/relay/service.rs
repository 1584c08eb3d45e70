use crate::llm::{ModelClient, RemoteResponse, TransportError};
use crate::relay::extract;
use crate::relay::prompt::{self, GenerationParams};
use crate::types::{ChatRequest, ChatResponse, HealthReport, RelayError};
use crate::utils::config::ModelConfig;
use std::sync::Arc;
use std::time::Duration;

const CHAT_APOLOGY_ERROR: &str = "AI service temporarily unavailable";
const CUSTOM_APOLOGY: &str =
    "I'm having trouble connecting to my AI capabilities right now. Please try again in a moment.";
const EMPTY_CUSTOM_REPLY: &str = "I received your message but couldn't generate a proper response.";

fn chat_apology(err: &RelayError) -> String {
    format!(
        "I understand you're asking about health-related matters. Currently, I'm experiencing \
         technical difficulties. For immediate health concerns, please consult with a healthcare \
         professional. You can try again shortly. (Error: {})",
        err
    )
}

impl From<TransportError> for RelayError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(_) => RelayError::RemoteTimeout,
            TransportError::Connect(detail) => RelayError::RemoteUnreachable(detail),
            TransportError::Other(detail) => RelayError::Unexpected(detail),
        }
    }
}

/// Per-call limits and generation settings for the relay.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub chat_timeout: Duration,
    pub probe_timeout: Duration,
    pub history_window: usize,
    pub params: GenerationParams,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            chat_timeout: Duration::from_secs(30),
            probe_timeout: Duration::from_secs(10),
            history_window: 6,
            params: GenerationParams::default(),
        }
    }
}

impl From<&ModelConfig> for RelaySettings {
    fn from(config: &ModelConfig) -> Self {
        Self {
            chat_timeout: Duration::from_secs(config.timeout_secs),
            probe_timeout: Duration::from_secs(config.health_check_timeout_secs),
            history_window: config.history_window,
            params: GenerationParams {
                max_tokens: config.max_tokens,
                temperature: config.temperature,
            },
        }
    }
}

/// Forwards chat requests to the hosted model and maps its replies and
/// failures onto [`ChatResponse`] / [`RelayError`].
///
/// Stateless apart from the shared client; one outbound call per request,
/// no retries.
pub struct RelayService {
    client: Arc<dyn ModelClient>,
    settings: RelaySettings,
}

impl RelayService {
    pub fn new(client: Arc<dyn ModelClient>, settings: RelaySettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &RelaySettings {
        &self.settings
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Flat-payload relay.
    ///
    /// Timeouts, connection failures and non-200 statuses are returned as
    /// errors. Anything else (an unparsable body, a 200 with no reply text,
    /// an unclassified transport failure) becomes a 200 apology carrying an
    /// `error` field.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, RelayError> {
        match self.try_chat(request).await {
            Ok(reply) => Ok(reply),
            Err(err) if err.propagates() => {
                tracing::warn!(error = %err, status = %err.status_code(), "Model relay failed");
                Err(err)
            }
            Err(err) => {
                tracing::error!(error = %err, "Model relay failed, replying with apology");
                Ok(ChatResponse::degraded(chat_apology(&err), CHAT_APOLOGY_ERROR))
            }
        }
    }

    async fn try_chat(&self, request: &ChatRequest) -> Result<ChatResponse, RelayError> {
        let history = prompt::trailing_window(request.history(), self.settings.history_window);
        let payload = prompt::flat_payload(&request.message, history, self.settings.params);

        let remote = self
            .client
            .post_json(&payload, self.settings.chat_timeout)
            .await?;

        if !remote.is_ok() {
            return Err(status_error(&remote));
        }

        let body = remote
            .json()
            .map_err(|e| RelayError::MalformedResponse(e.to_string()))?;

        let response = extract::first_text(&body, extract::FLAT_REPLY).ok_or_else(|| {
            RelayError::MalformedResponse("No response found in model output".to_string())
        })?;

        Ok(ChatResponse {
            response,
            conversation_id: extract::first_text(&body, extract::FLAT_CONVERSATION_ID),
            timestamp: extract::first_text(&body, extract::FLAT_TIMESTAMP),
            error: None,
        })
    }

    /// Chat-completions relay. Never fails: every error is folded into an
    /// apology reply whose `error` field carries the cause.
    pub async fn chat_custom(&self, request: &ChatRequest) -> ChatResponse {
        match self.try_chat_custom(request).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::error!(error = %err, "Custom model relay failed, replying with apology");
                ChatResponse::degraded(CUSTOM_APOLOGY, err.to_string())
            }
        }
    }

    async fn try_chat_custom(&self, request: &ChatRequest) -> Result<ChatResponse, RelayError> {
        let history = prompt::trailing_window(request.history(), self.settings.history_window);
        let payload = prompt::chat_payload(&request.message, history, self.settings.params);

        let remote = self
            .client
            .post_json(&payload, self.settings.chat_timeout)
            .await?;

        if !remote.is_ok() {
            return Err(RelayError::RemoteStatus {
                status: remote.status,
                message: format!("Model API error: {}", remote.body),
            });
        }

        let body = remote
            .json()
            .map_err(|e| RelayError::MalformedResponse(e.to_string()))?;

        Ok(ChatResponse {
            response: extract::chat_reply(&body)
                .unwrap_or_else(|| EMPTY_CUSTOM_REPLY.to_string()),
            conversation_id: extract::first_text(&body, extract::CHAT_CONVERSATION_ID),
            timestamp: extract::first_text(&body, extract::CHAT_TIMESTAMP),
            error: None,
        })
    }

    /// Probe the model with a tiny payload. Never fails.
    pub async fn health_check(&self) -> HealthReport {
        let payload = prompt::probe_payload();

        match self
            .client
            .post_json(&payload, self.settings.probe_timeout)
            .await
        {
            Ok(remote) if remote.is_ok() => HealthReport::healthy(),
            Ok(remote) => {
                tracing::warn!(status = remote.status, "Model health probe returned an error status");
                HealthReport::degraded()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Model health probe failed");
                HealthReport::unavailable(err.to_string())
            }
        }
    }
}

/// Non-200 from the flat endpoint: prefer the remote's own `error` message.
fn status_error(remote: &RemoteResponse) -> RelayError {
    let message = remote
        .json()
        .ok()
        .and_then(|body| extract::first_text(&body, extract::REMOTE_ERROR))
        .unwrap_or_else(|| format!("Model API returned status {}", remote.status));

    RelayError::RemoteStatus {
        status: remote.status,
        message,
    }
}
