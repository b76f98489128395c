use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{ReplyVariant, ServerConfig};
use crate::error::ApiError;
use crate::models::{
    function_call_transcript, GreetingReply, GreetingRequest, ReplyMessage, TranscriptRequest,
};
use crate::report;

pub const CHAT_ROUTE: &str = "/api/chat";
pub const STATUS_ROUTE: &str = "/status";

/// Per-process state shared by the handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub variant: ReplyVariant,
}

/// Build the Axum router: `POST /api/chat` for the configured variant plus
/// `GET /status`, wrapped in request tracing and CORS.
pub fn build_router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        variant: config.variant,
    });

    let chat = match config.variant {
        ReplyVariant::Greeting => post(greeting_chat),
        ReplyVariant::FunctionCall => post(function_call_chat),
    };

    Router::new()
        .route(CHAT_ROUTE, chat)
        .route(STATUS_ROUTE, get(status))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(crate::util::cors_layer(config)),
        )
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        "chat-stub listening on http://{} (variant: {})",
        config.bind_addr,
        config.variant
    );

    axum::serve(listener, build_router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("chat-stub stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Parse the body as JSON of any shape. Content type is not checked; only
/// bytes that are not JSON at all are rejected.
fn parse_body(body: &Bytes) -> Result<Value, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// Greeting version: log `{message, history}` and reply with the fixed greeting.
async fn greeting_chat(body: Bytes) -> Result<Json<GreetingReply>, ApiError> {
    let req = GreetingRequest::from_json(&parse_body(&body)?);
    report::log_greeting(&req);
    Ok(Json(GreetingReply::fixed()))
}

/// Function-call version: log `{messages}` and reply with the fixed transcript.
async fn function_call_chat(body: Bytes) -> Result<Json<&'static [ReplyMessage]>, ApiError> {
    let req = TranscriptRequest::from_json(&parse_body(&body)?);
    report::log_transcript(&req);
    Ok(Json(function_call_transcript()))
}

/// Service status endpoint exposing the active variant and routes.
async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "chat-stub",
        "version": env!("CARGO_PKG_VERSION"),
        "variant": state.variant,
        "routes": [STATUS_ROUTE, CHAT_ROUTE]
    }))
}
