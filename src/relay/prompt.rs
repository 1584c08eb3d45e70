//! Outbound payloads sent to the hosted model.

use crate::types::{HistoryEntry, MessageRole};
use serde_json::{json, Value};

/// Persona and safety disclaimer sent with every relayed message.
pub const HEALTH_CONTEXT: &str = "\
You are a helpful AI health assistant. You provide general health information,
wellness tips, and answer health-related questions. However, you always include
important disclaimers:

IMPORTANT: I am an AI assistant and cannot provide medical diagnosis,
treatment recommendations, or emergency advice. Please consult with qualified
healthcare professionals for medical concerns. In case of emergency,
contact your local emergency services immediately.

When responding:
1. Be empathetic and supportive
2. Provide general wellness information
3. Suggest consulting healthcare professionals for specific medical concerns
4. Never diagnose conditions or recommend specific treatments
5. Encourage healthy lifestyle choices
6. Be clear about your limitations as an AI
";

/// Message used by the health probe.
pub const PROBE_MESSAGE: &str = "Test connection";
const PROBE_MAX_TOKENS: u32 = 10;

/// Sampling settings forwarded with every chat payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// The most recent `limit` entries of `history`, oldest first.
pub fn trailing_window(history: &[HistoryEntry], limit: usize) -> &[HistoryEntry] {
    &history[history.len().saturating_sub(limit)..]
}

/// Flat payload for `/ai/chat`: message, history and system prompt as
/// sibling fields.
pub fn flat_payload(message: &str, history: &[HistoryEntry], params: GenerationParams) -> Value {
    json!({
        "message": message,
        "conversation_history": history,
        "system_prompt": HEALTH_CONTEXT,
        "max_tokens": params.max_tokens,
        "temperature": params.temperature,
    })
}

/// Chat-completions style payload for `/ai/chat/custom`: one `messages`
/// array of system prompt, history, then the new user turn.
pub fn chat_payload(message: &str, history: &[HistoryEntry], params: GenerationParams) -> Value {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(HistoryEntry {
        role: MessageRole::System,
        content: HEALTH_CONTEXT.to_string(),
    });
    messages.extend(history.iter().cloned());
    messages.push(HistoryEntry::user(message));

    json!({
        "messages": messages,
        "max_tokens": params.max_tokens,
        "temperature": params.temperature,
    })
}

/// Minimal payload for the health probe.
pub fn probe_payload() -> Value {
    json!({
        "message": PROBE_MESSAGE,
        "max_tokens": PROBE_MAX_TOKENS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(n: usize) -> Vec<HistoryEntry> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    HistoryEntry::user(format!("q{}", i))
                } else {
                    HistoryEntry::assistant(format!("a{}", i))
                }
            })
            .collect()
    }

    #[test]
    fn test_window_keeps_most_recent_entries() {
        let h = history(9);
        let window = trailing_window(&h, 6);
        assert_eq!(window.len(), 6);
        assert_eq!(window[0].content, "a3");
        assert_eq!(window[5].content, "q8");
    }

    #[test]
    fn test_window_shorter_than_limit_is_untouched() {
        let h = history(3);
        assert_eq!(trailing_window(&h, 6), &h[..]);
        assert!(trailing_window(&[], 6).is_empty());
    }

    #[test]
    fn test_flat_payload_shape() {
        let h = history(2);
        let payload = flat_payload("How do I sleep better?", &h, GenerationParams::default());

        assert_eq!(payload["message"], "How do I sleep better?");
        assert_eq!(payload["conversation_history"].as_array().unwrap().len(), 2);
        assert_eq!(payload["system_prompt"], HEALTH_CONTEXT);
        assert_eq!(payload["max_tokens"], 500);
        assert_eq!(payload["temperature"], 0.7);
    }

    #[test]
    fn test_chat_payload_orders_system_history_user() {
        let h = history(2);
        let payload = chat_payload("next", &h, GenerationParams::default());
        let messages = payload["messages"].as_array().unwrap();

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["content"], "q0");
        assert_eq!(messages[2]["role"], "assistant");
        assert_eq!(messages[3]["role"], "user");
        assert_eq!(messages[3]["content"], "next");
    }

    #[test]
    fn test_probe_payload() {
        let payload = probe_payload();
        assert_eq!(payload["message"], "Test connection");
        assert_eq!(payload["max_tokens"], 10);
    }
}
