//! Scripted transport for unit tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{HttpFetch, HttpResponse, TransportError};

/// Answers from a fixed URL table and records every URL requested.
/// Unscripted URLs answer 404.
#[derive(Default)]
pub struct ScriptedFetch {
    routes: HashMap<String, Result<HttpResponse, TransportError>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(mut self, url: &str, err: TransportError) -> Self {
        self.routes.insert(url.to_string(), Err(err));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn calls_to(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|u| u.starts_with(prefix)).count()
    }
}

#[async_trait]
impl HttpFetch for ScriptedFetch {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_string());
        }
        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse::new(404, "")))
    }
}
