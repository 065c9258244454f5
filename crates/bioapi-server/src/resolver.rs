//! Identifier routing
//!
//! An identifier's shape decides which database owns it: four characters for
//! a PDB entry, six for a UniProtKB accession. [`ProteinResolver`] validates
//! the shape before any network call, runs the matching fetch client and
//! adapter, and logs every failure exactly once before handing it back.

use std::sync::Arc;

use crate::config::UpstreamConfig;
use crate::error::ProteinError;
use crate::models::ProteinRecord;
use crate::sources::{pdb, uniprot, Upstream};
use crate::upstream::HttpFetch;

/// Pick the source for `id`, or reject it without doing any I/O.
pub fn route_identifier(id: &str) -> Result<Upstream, ProteinError> {
    check_alphanumeric(id)?;

    Upstream::for_id_length(id.len()).ok_or_else(|| {
        ProteinError::invalid(
            id,
            format!(
                "Expected a {}-character PDB ID or a {}-character UniProt accession, got {} characters.",
                Upstream::Pdb.id_length(),
                Upstream::Uniprot.id_length(),
                id.len()
            ),
        )
    })
}

/// Validate `id` for a lookup already pinned to `upstream`.
pub fn check_identifier(upstream: Upstream, id: &str) -> Result<(), ProteinError> {
    check_alphanumeric(id)?;

    if id.len() != upstream.id_length() {
        return Err(ProteinError::invalid(
            id,
            format!(
                "{} IDs must be exactly {} characters long.",
                upstream,
                upstream.id_length()
            ),
        ));
    }

    Ok(())
}

fn check_alphanumeric(id: &str) -> Result<(), ProteinError> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ProteinError::invalid(id, "Only letters and digits are allowed."));
    }
    Ok(())
}

/// Dispatches identifiers to the PDB or UniProt pipeline
#[derive(Clone)]
pub struct ProteinResolver {
    pdb: pdb::PdbClient,
    uniprot: uniprot::UniprotClient,
}

impl ProteinResolver {
    pub fn new(http: Arc<dyn HttpFetch>, config: &UpstreamConfig) -> Self {
        Self {
            pdb: pdb::PdbClient::new(http.clone(), config.pdb_base_url.as_str()),
            uniprot: uniprot::UniprotClient::new(http, config.uniprot_base_url.as_str()),
        }
    }

    /// Route by identifier length and return the unified record.
    pub async fn resolve(&self, id: &str) -> Result<ProteinRecord, ProteinError> {
        let upstream = route_identifier(id).inspect_err(|e| log_rejected(id, e))?;
        self.fetch_normalized(upstream, id).await
    }

    /// Same as [`resolve`](Self::resolve) but only accepts identifiers owned
    /// by `upstream`.
    pub async fn resolve_from(
        &self,
        upstream: Upstream,
        id: &str,
    ) -> Result<ProteinRecord, ProteinError> {
        check_identifier(upstream, id).inspect_err(|e| log_rejected(id, e))?;
        self.fetch_normalized(upstream, id).await
    }

    async fn fetch_normalized(
        &self,
        upstream: Upstream,
        id: &str,
    ) -> Result<ProteinRecord, ProteinError> {
        let result = match upstream {
            Upstream::Pdb => self.pdb.fetch(id).await.map(|e| pdb::normalize(&e)),
            Upstream::Uniprot => self.uniprot.fetch(id).await.map(|e| uniprot::normalize(&e)),
        };

        result.inspect_err(|e| {
            tracing::error!(
                protein_id = %id,
                upstream = %upstream,
                error = %e,
                "Error fetching data for protein ID {}",
                id
            );
        })
    }
}

fn log_rejected(id: &str, err: &ProteinError) {
    tracing::warn!(protein_id = %id, error = %err, "Rejected protein identifier");
}
