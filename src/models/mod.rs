//! Wire types for the `/api/chat` endpoint.
//!
//! - `chat`: request bodies for both endpoint versions, with tolerant extraction
//!   from arbitrary JSON.
//! - `reply`: the fixed replies each version sends back.

pub mod chat;
pub mod reply;

pub use chat::{GreetingRequest, HistoryEntry, RoleMessage, TranscriptRequest};
pub use reply::{
    function_call_transcript, FunctionArguments, FunctionCall, GreetingReply, ReplyMessage,
};
