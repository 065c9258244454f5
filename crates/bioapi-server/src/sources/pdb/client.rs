//! RCSB fetch client

use std::sync::Arc;

use super::models::PdbEntry;
use crate::error::ProteinError;
use crate::sources::{get_text, parse_json, Upstream};
use crate::upstream::HttpFetch;

/// Fetches core entries from `{base_url}/{id}`
#[derive(Clone)]
pub struct PdbClient {
    http: Arc<dyn HttpFetch>,
    base_url: String,
}

impl PdbClient {
    pub fn new(http: Arc<dyn HttpFetch>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn entry_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// One request, no retry. A body that does not match [`PdbEntry`] fails
    /// the fetch.
    pub async fn fetch(&self, id: &str) -> Result<PdbEntry, ProteinError> {
        let body = get_text(self.http.as_ref(), Upstream::Pdb, id, &self.entry_url(id)).await?;
        parse_json(Upstream::Pdb, id, &body)
    }
}
