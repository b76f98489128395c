use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Greeting-version reply: `{ "message": "...", "code": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingReply {
    pub message: String,
    pub code: String,
}

impl GreetingReply {
    pub const MESSAGE: &'static str = "Hello World :)";
    pub const CODE: &'static str = "print('Hello from Python!')";

    /// The one reply this version ever sends.
    pub fn fixed() -> Self {
        Self {
            message: Self::MESSAGE.to_string(),
            code: Self::CODE.to_string(),
        }
    }
}

/// Arguments of the simulated function call. Sent as a JSON object, not as
/// an encoded string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionArguments {
    pub query: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: FunctionArguments,
}

/// One message of the simulated function-call transcript.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyMessage {
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub function_call: Option<FunctionCall>,
}

impl ReplyMessage {
    fn text(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
            function_call: None,
        }
    }
}

static TRANSCRIPT: Lazy<Vec<ReplyMessage>> = Lazy::new(|| {
    vec![
        ReplyMessage {
            role: "assistant".to_string(),
            content: String::new(),
            function_call: Some(FunctionCall {
                name: "run_python".to_string(),
                arguments: FunctionArguments {
                    query: "Hello".to_string(),
                    code: GreetingReply::CODE.to_string(),
                },
            }),
        },
        ReplyMessage::text("function", "Hello from Python!"),
        ReplyMessage::text("assistant", GreetingReply::MESSAGE),
    ]
});

/// The fixed three-message transcript: an assistant turn requesting a
/// function call, the function's output, and the assistant's final answer.
pub fn function_call_transcript() -> &'static [ReplyMessage] {
    &TRANSCRIPT
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn greeting_reply_wire_shape() {
        let v = serde_json::to_value(GreetingReply::fixed()).unwrap();
        assert_eq!(
            v,
            json!({"message": "Hello World :)", "code": "print('Hello from Python!')"})
        );
    }

    #[test]
    fn transcript_wire_shape() {
        let v = serde_json::to_value(function_call_transcript()).unwrap();
        assert_eq!(
            v,
            json!([
                {
                    "role": "assistant",
                    "content": "",
                    "function_call": {
                        "name": "run_python",
                        "arguments": {
                            "query": "Hello",
                            "code": "print('Hello from Python!')"
                        }
                    }
                },
                {"role": "function", "content": "Hello from Python!"},
                {"role": "assistant", "content": "Hello World :)"}
            ])
        );
    }

    #[test]
    fn only_one_message_carries_a_function_call() {
        let with_call = function_call_transcript()
            .iter()
            .filter(|m| m.function_call.is_some())
            .count();
        assert_eq!(function_call_transcript().len(), 3);
        assert_eq!(with_call, 1);
    }
}
