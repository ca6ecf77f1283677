//! Inbound message extraction
//!
//! Third-party callers send `params` in several shapes. Extraction runs a
//! fixed, ordered list of strategies over the raw params; the first one that
//! matches wins, and an unmatched request falls back to a literal greeting.

use serde_json::Value;

/// Text used when no strategy recognizes the params
pub const FALLBACK_TEXT: &str = "Hello";

/// One extraction strategy: probe the params for a recognizable message
/// shape, yielding the normalized text when it matches.
type Extractor = fn(&Value) -> Option<String>;

/// Strategies in priority order; first match wins
const EXTRACTORS: &[Extractor] = &[
    single_message_parts,
    message_list,
    plain_message,
    content_field,
    params_as_string,
];

/// Extract a unified text query from request params
pub fn extract_text(params: &Value) -> String {
    EXTRACTORS
        .iter()
        .find_map(|extract| extract(params))
        .unwrap_or_else(|| FALLBACK_TEXT.to_string())
}

/// The inbound messages to echo into the task history, in input order
///
/// A structured `message` object yields one entry, a `messages` array yields
/// all of its entries. Plain-string shapes yield nothing here; the adapter
/// synthesizes a user message from the extracted text instead.
pub fn inbound_messages(params: &Value) -> Vec<Value> {
    if let Some(message) = params.get("message") {
        if message.is_object() {
            return vec![message.clone()];
        }
    }
    if let Some(messages) = params.get("messages").and_then(Value::as_array) {
        return messages.clone();
    }
    Vec::new()
}

/// `params.message.parts[0].text`: single structured message
fn single_message_parts(params: &Value) -> Option<String> {
    params
        .get("message")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_owned)
}

/// `params.messages`: concatenate the textual parts of every message
fn message_list(params: &Value) -> Option<String> {
    let messages = params.get("messages")?.as_array()?;
    let joined = messages
        .iter()
        .map(message_text)
        .collect::<Vec<_>>()
        .join("\n");
    Some(joined)
}

/// `params.message` as a plain string
fn plain_message(params: &Value) -> Option<String> {
    params.get("message")?.as_str().map(str::to_owned)
}

/// `params.content` as a plain string
fn content_field(params: &Value) -> Option<String> {
    params.get("content")?.as_str().map(str::to_owned)
}

/// `params` itself as a plain string
fn params_as_string(params: &Value) -> Option<String> {
    params.as_str().map(str::to_owned)
}

/// Textual form of one message: parts joined by newline, or its `text` field
fn message_text(message: &Value) -> String {
    match message.get("parts").and_then(Value::as_array) {
        Some(parts) => parts.iter().map(part_text).collect::<Vec<_>>().join("\n"),
        None => message
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Contribution of one part: text verbatim, data JSON-serialized, others none
fn part_text(part: &Value) -> String {
    match part.get("kind").and_then(Value::as_str) {
        Some("text") => part
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Some("data") => part.get("data").map(|data| data.to_string()).unwrap_or_default(),
        _ => String::new(),
    }
}
