//! Console rendering of incoming chat requests.
//!
//! The endpoint exists so a frontend developer can watch what their client
//! sends; these helpers turn a request into a readable block that the
//! handlers emit through `tracing`.

use std::fmt;

use crate::models::{GreetingRequest, TranscriptRequest};

const HEADER: &str = "=== New request ===";
const RULE: &str = "===================";

/// Console block for a greeting-version request.
pub struct GreetingReport<'a>(pub &'a GreetingRequest);

impl fmt::Display for GreetingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let req = self.0;
        writeln!(f, "{HEADER}")?;
        writeln!(f, "Message: {}", req.message)?;
        writeln!(f, "History:")?;
        for (i, pair) in req.history.iter().enumerate() {
            writeln!(f, "  Pair {}:", i + 1)?;
            writeln!(f, "    Question: {}", pair.question)?;
            writeln!(f, "    Answer: {}", pair.answer)?;
            writeln!(f, "    Time: {}", pair.timestamp)?;
        }
        f.write_str(RULE)
    }
}

/// Console block for a function-call-version request.
pub struct TranscriptReport<'a>(pub &'a TranscriptRequest);

impl fmt::Display for TranscriptReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "Messages:")?;
        for (i, msg) in self.0.messages.iter().enumerate() {
            writeln!(f, "  {}. [{}] {}", i + 1, msg.role, msg.content)?;
            if let Some(fc) = &msg.function_call {
                writeln!(f, "     function_call: {fc}")?;
            }
        }
        f.write_str(RULE)
    }
}

pub fn render_greeting(req: &GreetingRequest) -> String {
    GreetingReport(req).to_string()
}

pub fn render_transcript(req: &TranscriptRequest) -> String {
    TranscriptReport(req).to_string()
}

/// Emit the greeting-version request on the console.
pub fn log_greeting(req: &GreetingRequest) {
    tracing::info!(
        target: "chat_stub::chat",
        history_len = req.history.len(),
        "\n{}",
        GreetingReport(req)
    );
}

/// Emit the function-call-version request on the console.
pub fn log_transcript(req: &TranscriptRequest) {
    tracing::info!(
        target: "chat_stub::chat",
        message_count = req.messages.len(),
        "\n{}",
        TranscriptReport(req)
    );
}
