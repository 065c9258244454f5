use serde::{Deserialize, Serialize};

use crate::error::ProteinError;
use crate::models::ProteinRecord;
use crate::resolver::ProteinResolver;
use crate::sources::Upstream;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProteinQuery {
    pub protein_id: String,
    /// Pin the lookup to one database instead of routing by length
    #[serde(default)]
    pub upstream: Option<Upstream>,
}

impl GetProteinQuery {
    pub fn routed(protein_id: impl Into<String>) -> Self {
        Self {
            protein_id: protein_id.into(),
            upstream: None,
        }
    }

    pub fn pinned(upstream: Upstream, protein_id: impl Into<String>) -> Self {
        Self {
            protein_id: protein_id.into(),
            upstream: Some(upstream),
        }
    }
}

/// Echoes the requested identifier next to the unified record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetProteinResponse {
    pub protein_id: String,
    pub data: ProteinRecord,
}

#[tracing::instrument(skip(resolver, query), fields(protein_id = %query.protein_id, upstream = ?query.upstream))]
pub async fn handle(
    resolver: &ProteinResolver,
    query: GetProteinQuery,
) -> Result<GetProteinResponse, ProteinError> {
    let data = match query.upstream {
        Some(upstream) => resolver.resolve_from(upstream, &query.protein_id).await?,
        None => resolver.resolve(&query.protein_id).await?,
    };

    Ok(GetProteinResponse {
        protein_id: query.protein_id,
        data,
    })
}
