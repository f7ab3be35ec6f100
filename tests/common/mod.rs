#![allow(dead_code)]

use std::{
    net::{SocketAddr, TcpListener},
    sync::{Arc, Mutex},
};

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Extension, Router,
};
use webvirt_auth::{AccountClient, Settings};

/// A request as the stub account service saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

struct StubState {
    status: StatusCode,
    body: String,
    requests: Vec<RecordedRequest>,
}

/// An account service that answers every route with one canned response
/// and records what it was sent.
pub struct StubAccountService {
    addr: SocketAddr,
    state: Arc<Mutex<StubState>>,
}

impl StubAccountService {
    pub fn spawn(status: StatusCode, body: &str) -> Self {
        let state = Arc::new(Mutex::new(StubState {
            status,
            body: body.to_owned(),
            requests: Vec::new(),
        }));
        let app = Router::new()
            .fallback(record)
            .layer(Extension(state.clone()));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();
        let server = axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service());

        tokio::spawn(async move {
            server.await.unwrap();
        });

        StubAccountService { addr, state }
    }

    pub fn ok(body: &str) -> Self {
        Self::spawn(StatusCode::OK, body)
    }

    pub fn settings(&self) -> Settings {
        Settings::new(format!("http://{}", self.addr), "/api/v1")
    }

    pub fn client(&self) -> AccountClient {
        AccountClient::new(self.settings()).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

async fn record(
    Extension(state): Extension<Arc<Mutex<StubState>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let mut state = state.lock().unwrap();

    state.requests.push(RecordedRequest {
        method,
        path: uri.path().to_owned(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
        body,
    });

    (
        state.status,
        [(CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// An address nothing is listening on.
pub fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();

    listener.local_addr().unwrap()
}
