//! Fake Genius API served by axum on a background thread.
//!
//! The resolver under test is blocking, so the server gets its own thread
//! and tokio runtime instead of sharing the test's.

use super::constants::*;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A canned response: status plus raw body.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn raw(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: json!({"meta": {"status": status}}).to_string(),
        }
    }
}

/// What the mock saw for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Default)]
struct MockState {
    searches: HashMap<String, MockResponse>,
    artists: HashMap<i64, MockResponse>,
    slow_searches: HashSet<String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockState {
    fn record(&self, path: String, query: Option<String>, headers: &HeaderMap) {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        self.requests.lock().unwrap().push(RecordedRequest {
            path,
            query,
            authorization,
        });
    }

    fn authorized(headers: &HeaderMap) -> bool {
        let expected = format!("Bearer {}", TEST_TOKEN);
        headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            == Some(expected.as_str())
    }
}

#[derive(Default)]
pub struct MockGeniusBuilder {
    state: MockState,
}

impl MockGeniusBuilder {
    pub fn search(mut self, term: &str, response: MockResponse) -> Self {
        self.state.searches.insert(term.to_string(), response);
        self
    }

    /// The search for `term` stalls longer than the client timeout.
    pub fn slow_search(mut self, term: &str) -> Self {
        self.state.slow_searches.insert(term.to_string());
        self
    }

    pub fn artist(mut self, id: i64, response: MockResponse) -> Self {
        self.state.artists.insert(id, response);
        self
    }

    pub fn spawn(self) -> MockGenius {
        MockGenius::spawn(self.state)
    }
}

/// Running mock server. Shuts down when dropped.
pub struct MockGenius {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    state: Arc<MockState>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockGenius {
    pub fn builder() -> MockGeniusBuilder {
        MockGeniusBuilder::default()
    }

    fn spawn(state: MockState) -> Self {
        let state = Arc::new(state);

        // Bind before spawning so the port is accepting by the time we return
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
        listener
            .set_nonblocking(true)
            .expect("Failed to set listener non-blocking");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let app = Router::new()
            .route("/search", get(search))
            .route("/artists/{id}", get(artist))
            .with_state(state.clone());

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build mock server runtime");

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("Failed to adopt listener");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        shutdown_rx.await.ok();
                    })
                    .await
                    .expect("Mock server failed");
            });
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

impl Drop for MockGenius {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn respond(response: &MockResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body.clone(),
    )
        .into_response()
}

async fn search(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let term = params.get("q").cloned();
    state.record("/search".to_string(), term.clone(), &headers);

    if !MockState::authorized(&headers) {
        return respond(&MockResponse::status(401));
    }
    let Some(term) = term else {
        return respond(&MockResponse::status(400));
    };

    if state.slow_searches.contains(&term) {
        tokio::time::sleep(Duration::from_millis(SLOW_RESPONSE_MS)).await;
    }

    match state.searches.get(&term) {
        Some(response) => respond(response),
        None => respond(&MockResponse::json(super::fixtures::empty_search())),
    }
}

async fn artist(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    state.record(format!("/artists/{}", id), None, &headers);

    if !MockState::authorized(&headers) {
        return respond(&MockResponse::status(401));
    }

    match id.parse::<i64>().ok().and_then(|id| state.artists.get(&id)) {
        Some(response) => respond(response),
        None => respond(&MockResponse::status(404)),
    }
}
