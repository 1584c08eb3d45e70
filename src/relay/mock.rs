//! Keyword-matched stand-in for the hosted model.
//!
//! Categories are checked in table order against the lowercased message;
//! the first category with any matching keyword wins.

use crate::types::{now_timestamp, ChatRequest, ChatResponse};

pub const MOCK_CONVERSATION_ID: &str = "mock_conversation_123";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Pain,
    Sleep,
    Nutrition,
    General,
}

const CATEGORIES: &[(Topic, &[&str])] = &[
    (Topic::Greeting, &["hello", "hi", "hey"]),
    (Topic::Pain, &["headache", "pain"]),
    (Topic::Sleep, &["sleep", "tired"]),
    (Topic::Nutrition, &["diet", "nutrition", "eat"]),
];

/// Plain substring match, so "this" counts as a greeting. Kept that way for
/// parity with existing clients.
pub fn classify(message: &str) -> Topic {
    let lowered = message.to_lowercase();

    CATEGORIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::General)
}

pub fn reply_for(topic: Topic, message: &str) -> String {
    match topic {
        Topic::Greeting => "Hello! I'm your Health AI assistant. How can I help you with your \
            health and wellness questions today?"
            .to_string(),
        Topic::Pain => "I understand you're asking about headaches. While I can provide general \
            information about common headache types, it's important to consult with a \
            healthcare professional for proper diagnosis and treatment, especially if the pain \
            is severe or persistent."
            .to_string(),
        Topic::Sleep => "Sleep is crucial for overall health. Most adults need 7-9 hours of \
            quality sleep per night. Good sleep hygiene includes maintaining a consistent \
            schedule, creating a restful environment, and avoiding screens before bedtime. If \
            you're experiencing ongoing sleep issues, consider discussing them with a \
            healthcare provider."
            .to_string(),
        Topic::Nutrition => "A balanced diet with plenty of fruits, vegetables, lean proteins, \
            and whole grains supports overall health. Remember to stay hydrated and practice \
            portion control. For personalized nutrition advice, a registered dietitian can \
            provide guidance tailored to your specific needs."
            .to_string(),
        Topic::General => format!(
            "Thank you for your message about '{}'. As a health AI assistant, I focus on \
             providing general wellness information and encouraging healthy lifestyle choices. \
             For specific medical concerns, please consult with qualified healthcare \
             professionals who can provide personalized advice based on your complete health \
             history.",
            message
        ),
    }
}

pub fn respond(request: &ChatRequest) -> ChatResponse {
    let topic = classify(&request.message);
    tracing::debug!(?topic, "Mock reply");

    ChatResponse {
        response: reply_for(topic, &request.message),
        conversation_id: Some(MOCK_CONVERSATION_ID.to_string()),
        timestamp: Some(now_timestamp()),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_category_wins() {
        assert_eq!(classify("hello, I have a headache"), Topic::Greeting);
        assert_eq!(classify("my headache won't let me sleep"), Topic::Pain);
        assert_eq!(classify("so tired after I eat"), Topic::Sleep);
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(classify("NUTRITION facts"), Topic::Nutrition);
    }

    #[test]
    fn test_general_reply_echoes_message() {
        assert_eq!(classify("blood pressure"), Topic::General);
        let reply = reply_for(Topic::General, "blood pressure");
        assert!(reply.starts_with("Thank you for your message about 'blood pressure'."));
    }

    #[test]
    fn test_respond_fills_mock_metadata() {
        let resp = respond(&ChatRequest::new("hey"));
        assert_eq!(resp.conversation_id.as_deref(), Some(MOCK_CONVERSATION_ID));
        assert!(resp.timestamp.is_some());
        assert!(!resp.is_degraded());
        assert!(resp.response.starts_with("Hello!"));
    }
}
