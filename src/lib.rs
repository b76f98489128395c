#![forbid(unsafe_code)]
#![doc = r#"
Chat Stub

A stand-in for a chat backend: `POST /api/chat` logs whatever the client sent to
the console and answers with a fixed reply, so a frontend can be developed
against a stable contract before any real chat logic exists.

Two versions of the endpoint are available, one active per process
(`CHAT_REPLY_VARIANT`):
- `greeting`: `{message, history}` in, `{"message": "Hello World :)", "code": "print('Hello from Python!')"}` out.
- `function-call`: `{messages}` in, a fixed three-message function-call transcript out.

Modules
- `models`: Request and reply wire types, tolerant request extraction.
- `report`: Console rendering of incoming requests.
- `config`: Environment-driven server configuration.
- `server`: Axum router, handlers and the serve loop.
- `error`: API and configuration error types.
- `util`: Tracing initialization and the CORS layer.
"#]

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod server;
pub mod util;

pub use crate::config::{ReplyVariant, ServerConfig};
pub use crate::error::{ApiError, ConfigError};
pub use crate::server::build_router;
