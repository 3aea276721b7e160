#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use url::Url;

/// Request payloads captured by the stub API, in arrival order.
pub type CapturedRequests = Arc<Mutex<Vec<Value>>>;

/// Canned response the stub API returns for every `POST /shorten`.
pub enum StubResponse {
    Success {
        short_url: String,
        qr_code_base64: Option<String>,
    },
    Error {
        status: StatusCode,
        body: Value,
    },
    /// Non-JSON body, as a proxy or crashed server would produce.
    Garbage {
        status: StatusCode,
        body: &'static str,
    },
}

impl StubResponse {
    pub fn success(short_url: &str) -> Self {
        Self::Success {
            short_url: short_url.to_string(),
            qr_code_base64: None,
        }
    }

    pub fn success_with_qr(short_url: &str, qr_code_base64: &str) -> Self {
        Self::Success {
            short_url: short_url.to_string(),
            qr_code_base64: Some(qr_code_base64.to_string()),
        }
    }

    pub fn error(status: u16, body: Value) -> Self {
        Self::Error {
            status: StatusCode::from_u16(status).unwrap(),
            body,
        }
    }

    pub fn garbage(status: u16, body: &'static str) -> Self {
        Self::Garbage {
            status: StatusCode::from_u16(status).unwrap(),
            body,
        }
    }
}

#[derive(Clone)]
struct StubState {
    captured: CapturedRequests,
    response: Arc<StubResponse>,
}

async fn shorten_stub(State(state): State<StubState>, Json(payload): Json<Value>) -> Response {
    state.captured.lock().unwrap().push(payload);

    match state.response.as_ref() {
        StubResponse::Success {
            short_url,
            qr_code_base64,
        } => {
            let mut body = json!({ "short_url": short_url });
            if let Some(qr) = qr_code_base64 {
                body["qr_code_base64"] = json!(qr);
            }
            Json(body).into_response()
        }
        StubResponse::Error { status, body } => (*status, Json(body.clone())).into_response(),
        StubResponse::Garbage { status, body } => (*status, body.to_string()).into_response(),
    }
}

/// Binds a stub shortening API on an ephemeral port and serves it in the
/// background.
///
/// Returns the base URL to point the client at, plus the captured request
/// payloads for wire-level assertions.
pub async fn spawn_stub_api(response: StubResponse) -> (Url, CapturedRequests) {
    let captured: CapturedRequests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        captured: captured.clone(),
        response: Arc::new(response),
    };

    let app = Router::new()
        .route("/shorten", post(shorten_stub))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base_url = Url::parse(&format!("http://{addr}")).unwrap();
    (base_url, captured)
}

/// An address nothing listens on, for transport-failure tests.
pub async fn unreachable_base_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{addr}")).unwrap()
}
