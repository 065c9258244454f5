//! Shared helpers for BioAPI integration tests
//!
//! [`StubFetch`] stands in for the network: it answers from a URL table and
//! records every request so tests can assert which upstream was contacted.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bioapi_server::{
    api::create_router,
    config::Config,
    features::FeatureState,
    upstream::{HttpFetch, HttpResponse, TransportError},
    ProteinResolver,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const PDB_BASE: &str = "https://data.rcsb.org/rest/v1/core/entry";
pub const UNIPROT_BASE: &str = "https://rest.uniprot.org/uniprotkb";

#[derive(Default)]
pub struct StubFetch {
    responses: Mutex<HashMap<String, Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<String>>,
}

impl StubFetch {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn on(&self, url: impl Into<String>, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, url: impl Into<String>, err: TransportError) {
        self.responses.lock().unwrap().insert(url.into(), Err(err));
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, base: &str) -> usize {
        self.requests().iter().filter(|u| u.starts_with(base)).count()
    }
}

#[async_trait]
impl HttpFetch for StubFetch {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse::new(404, "")))
    }
}

/// Full application router wired to `fetch` with default configuration
pub fn test_app(fetch: Arc<StubFetch>) -> Router {
    let config = Config::default();
    let resolver = ProteinResolver::new(fetch, &config.upstream);
    create_router(FeatureState::new(resolver), &config)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Buffers JSON log lines from a thread-scoped subscriber
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    /// Route events on the current thread into this buffer until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn events_at(&self, level: &str) -> Vec<serde_json::Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
            .filter(|event| event["level"] == level)
            .collect()
    }
}
