#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use chat_stub::config::{ReplyVariant, ServerConfig};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// Origin the default configuration grants CORS access to.
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// The real router bound to an ephemeral local port, for tests that need a
/// genuine HTTP client (CORS preflight, raw bodies without content type).
pub struct TestServer {
    pub base_url: String,
    pub addr: SocketAddr,
    join: JoinHandle<()>,
    client: reqwest::Client,
}

impl TestServer {
    fn make_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed building reqwest client")
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Perform a POST with JSON body.
    pub async fn post_json<T: serde::Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> reqwest::Result<reqwest::Response> {
        self.client.post(self.url(path)).json(body).send().await
    }

    /// Low-level POST with raw bytes and an optional content type.
    pub async fn post_bytes(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> reqwest::Result<reqwest::Response> {
        let mut rb = self.client.post(self.url(path));
        if let Some(ct) = content_type {
            rb = rb.header(reqwest::header::CONTENT_TYPE, ct);
        }
        rb.body(bytes).send().await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.join.abort();
    }
}

/// Spawn the application router on an ephemeral port.
pub async fn spawn_test_app(variant: ReplyVariant) -> TestServer {
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".into(),
        variant,
        ..ServerConfig::default()
    };
    let app = chat_stub::build_router(&config);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let base_url = format!("http://{}", addr);
    let server = axum::serve(listener, app.into_make_service());

    let join = tokio::spawn(async move {
        if let Err(e) = server.await {
            eprintln!("Test server error: {e:?}");
        }
    });

    TestServer {
        base_url,
        addr,
        join,
        client: TestServer::make_client(),
    }
}

/// Send one request through a freshly built router without binding a socket.
pub async fn oneshot(variant: ReplyVariant, req: Request<Body>) -> Response<Body> {
    let config = ServerConfig {
        variant,
        ..ServerConfig::default()
    };
    chat_stub::build_router(&config)
        .oneshot(req)
        .await
        .expect("request")
}

/// POST `body` verbatim to `/api/chat` with a JSON content type.
pub async fn post_chat(variant: ReplyVariant, body: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = oneshot(variant, req).await;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn expected_greeting() -> serde_json::Value {
    serde_json::json!({
        "message": "Hello World :)",
        "code": "print('Hello from Python!')"
    })
}

pub fn expected_transcript() -> serde_json::Value {
    serde_json::json!([
        {
            "role": "assistant",
            "content": "",
            "function_call": {
                "name": "run_python",
                "arguments": {"query": "Hello", "code": "print('Hello from Python!')"}
            }
        },
        {"role": "function", "content": "Hello from Python!"},
        {"role": "assistant", "content": "Hello World :)"}
    ])
}
