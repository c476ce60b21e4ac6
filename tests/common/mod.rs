//! In-process stub of an OpenAI-compatible `/chat/completions` endpoint.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: Value,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: String,
    delay: Option<Duration>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct StubServer {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubServer {
    pub async fn spawn(status: u16, reply: impl Into<String>) -> Self {
        Self::spawn_inner(status, reply.into(), None).await
    }

    pub async fn spawn_with_delay(delay: Duration, reply: impl Into<String>) -> Self {
        Self::spawn_inner(200, reply.into(), Some(delay)).await
    }

    /// Answers every call with one choice carrying `content`.
    pub async fn replying(content: &str) -> Self {
        Self::spawn(200, completion_body(&[content])).await
    }

    async fn spawn_inner(status: u16, reply: String, delay: Option<Duration>) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: StatusCode::from_u16(status).expect("valid status code"),
            reply,
            delay,
            captured: captured.clone(),
        };

        let app = Router::new()
            .route("/v1/chat/completions", post(completions))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self {
            base_url: format!("http://{addr}/v1"),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().expect("captured lock").clone()
    }
}

async fn completions(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let body = serde_json::from_str(&body).unwrap_or(Value::String(body));
    state
        .captured
        .lock()
        .expect("captured lock")
        .push(CapturedRequest { headers, body });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.reply.clone(),
    )
}

/// A chat completion body with one choice per entry of `contents`.
pub fn completion_body(contents: &[&str]) -> String {
    let choices: Vec<Value> = contents
        .iter()
        .enumerate()
        .map(|(i, c)| {
            json!({
                "index": i,
                "message": {"role": "assistant", "content": c},
                "finish_reason": "stop"
            })
        })
        .collect();

    json!({
        "id": "chatcmpl-stub",
        "object": "chat.completion",
        "model": "gpt-4.1-mini",
        "choices": choices,
        "usage": {"prompt_tokens": 20, "completion_tokens": 1, "total_tokens": 21}
    })
    .to_string()
}

/// An address nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}/v1")
}
