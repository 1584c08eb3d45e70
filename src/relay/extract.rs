//! Reply extraction from loosely-typed model responses.
//!
//! The hosted model's output schema is not fixed, so each value we want is
//! described by an ordered table of key paths. The first path that resolves
//! to a non-empty value wins.

use serde_json::Value;

/// One step into a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Key(&'static str),
    Index(usize),
}

pub type KeyPath = &'static [Segment];

use Segment::{Index, Key};

/// Reply text in a flat response: `response`, then `answer`, then `output`.
pub const FLAT_REPLY: &[KeyPath] = &[&[Key("response")], &[Key("answer")], &[Key("output")]];

/// Reply text of the first choice in a chat-completions style response.
pub const CHOICE_REPLY: &[KeyPath] = &[&[Key("choices"), Index(0), Key("message"), Key("content")]];

/// Completion-style reply text, consulted only when `choices` is empty.
pub const TEXT_REPLY: &[KeyPath] = &[&[Key("text")], &[Key("generated_text")]];

/// Error message in a non-200 body: a plain `error` string, or the
/// `error.message` of an error object.
pub const REMOTE_ERROR: &[KeyPath] = &[&[Key("error")], &[Key("error"), Key("message")]];

pub const FLAT_CONVERSATION_ID: &[KeyPath] = &[&[Key("conversation_id")]];
pub const FLAT_TIMESTAMP: &[KeyPath] = &[&[Key("timestamp")]];
pub const CHAT_CONVERSATION_ID: &[KeyPath] = &[&[Key("id")]];
pub const CHAT_TIMESTAMP: &[KeyPath] = &[&[Key("created")]];

/// Follow `path` into `value`.
pub fn lookup<'a>(value: &'a Value, path: &[Segment]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| match segment {
        Key(key) => current.get(*key),
        Index(i) => current.get(*i),
    })
}

/// First non-empty scalar found along `paths`, rendered as text.
///
/// Strings must be non-empty; numbers are stringified (some backends send
/// `created` as a Unix timestamp). Objects, arrays, booleans and `null` are
/// skipped.
pub fn first_text(value: &Value, paths: &[KeyPath]) -> Option<String> {
    paths
        .iter()
        .filter_map(|path| lookup(value, path))
        .find_map(as_text)
}

/// Reply text of a chat-completions style response.
///
/// A missing `choices` counts as one empty choice, so the text fields are
/// read only when `choices` is an empty list (or `null`).
pub fn chat_reply(body: &Value) -> Option<String> {
    let no_choices = match body.get("choices") {
        Some(Value::Array(choices)) => choices.is_empty(),
        Some(Value::Null) => true,
        _ => false,
    };

    if no_choices {
        first_text(body, TEXT_REPLY)
    } else {
        first_text(body, CHOICE_REPLY)
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
