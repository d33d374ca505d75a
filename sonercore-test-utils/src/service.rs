//! In-process stand-in for the analysis service.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use sonercore::{ClientConfig, HttpAnalysisClient};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const ANALYZE_PATH: &str = "/api/analyze";

/// What the fake answers to every analyze request.
#[derive(Clone, Debug)]
pub enum Reply {
    /// 200 with a JSON body
    Json(Value),
    /// Any status with a plain text body
    Status(u16, String),
    /// 200 with an arbitrary (possibly malformed) body
    Raw(String),
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

struct FakeState {
    reply: Reply,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct FakeAnalysisService {
    url: String,
    state: Arc<FakeState>,
    handle: JoinHandle<()>,
}

impl FakeAnalysisService {
    pub async fn spawn(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(FakeState {
            reply,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route(ANALYZE_PATH, post(analyze))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            url: format!("http://{}{}", addr, ANALYZE_PATH),
            state,
            handle,
        })
    }

    /// Full analyze endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Drop for FakeAnalysisService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn analyze(State(state): State<Arc<FakeState>>, headers: HeaderMap, body: String) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(RecordedRequest { content_type, body });
    }

    match &state.reply {
        Reply::Json(value) => (
            StatusCode::OK,
            [(CONTENT_TYPE, "application/json")],
            value.to_string(),
        )
            .into_response(),
        Reply::Status(code, text) => (
            StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            text.clone(),
        )
            .into_response(),
        Reply::Raw(text) => (StatusCode::OK, text.clone()).into_response(),
    }
}

/// An analyze URL on a port nothing listens on.
pub async fn unreachable_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}{}", addr, ANALYZE_PATH))
}

/// HTTP client aimed at `url`, with a short timeout and colour off.
pub fn client_for(url: &str) -> anyhow::Result<HttpAnalysisClient> {
    let config = ClientConfig {
        service_url: url.to_string(),
        timeout: Duration::from_secs(5),
        color: false,
    };
    Ok(HttpAnalysisClient::new(&config)?)
}
