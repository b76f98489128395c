use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// One question/answer pair from the client's conversation history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    /// Client-side timestamp, passed through verbatim (usually ISO-8601).
    #[serde(default)]
    pub timestamp: String,
}

/// Greeting-version request body:
/// `{ "message": "...", "history": [{ "question", "answer", "timestamp" }, ...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GreetingRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// A role-tagged chat message as sent by the function-call client.
///
/// `function_call` appears when the client echoes back a previous
/// function-call turn; it is kept as raw JSON since it is only logged.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub function_call: Option<Value>,
}

/// Function-call-version request body: `{ "messages": [{ "role", "content" }, ...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRequest {
    #[serde(default)]
    pub messages: Vec<RoleMessage>,
}

/// Read `key` from a JSON object as text.
///
/// Missing keys and `null` become an empty string, strings are taken as-is and
/// any other value is rendered as its JSON text.
fn text_field(obj: &Value, key: &str) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Borrow `key` as an array; anything that is not an array reads as empty.
fn array_field<'a>(obj: &'a Value, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

impl HistoryEntry {
    pub fn from_json(v: &Value) -> Self {
        Self {
            question: text_field(v, "question"),
            answer: text_field(v, "answer"),
            timestamp: text_field(v, "timestamp"),
        }
    }
}

impl GreetingRequest {
    /// Tolerant extraction: never fails, substitutes empty values for anything
    /// missing or oddly shaped.
    pub fn from_json(v: &Value) -> Self {
        Self {
            message: text_field(v, "message"),
            history: array_field(v, "history")
                .iter()
                .map(HistoryEntry::from_json)
                .collect(),
        }
    }
}

impl RoleMessage {
    pub fn from_json(v: &Value) -> Self {
        Self {
            role: text_field(v, "role"),
            content: text_field(v, "content"),
            function_call: v.get("function_call").filter(|fc| !fc.is_null()).cloned(),
        }
    }
}

impl TranscriptRequest {
    pub fn from_json(v: &Value) -> Self {
        Self {
            messages: array_field(v, "messages")
                .iter()
                .map(RoleMessage::from_json)
                .collect(),
        }
    }
}
