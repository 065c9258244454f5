//! UniProtKB fetch client

use std::sync::Arc;

use super::models::UniprotEntry;
use crate::error::ProteinError;
use crate::sources::{get_text, parse_json, Upstream};
use crate::upstream::HttpFetch;

/// Fetches an accession as JSON metadata plus FASTA sequence text.
#[derive(Clone)]
pub struct UniprotClient {
    http: Arc<dyn HttpFetch>,
    base_url: String,
}

impl UniprotClient {
    pub fn new(http: Arc<dyn HttpFetch>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn json_url(&self, id: &str) -> String {
        format!("{}/{}?format=json", self.base_url, id)
    }

    pub fn fasta_url(&self, id: &str) -> String {
        format!("{}/{}?format=fasta", self.base_url, id)
    }

    /// The upstream serves metadata and sequence as separate formats, so this
    /// makes two requests in order. Either failing fails the whole fetch;
    /// no partially filled entry is returned.
    pub async fn fetch(&self, id: &str) -> Result<UniprotEntry, ProteinError> {
        let http = self.http.as_ref();

        let body = get_text(http, Upstream::Uniprot, id, &self.json_url(id)).await?;
        let mut entry: UniprotEntry = parse_json(Upstream::Uniprot, id, &body)?;

        entry.sequence = get_text(http, Upstream::Uniprot, id, &self.fasta_url(id)).await?;

        Ok(entry)
    }
}
