use crate::api::response::{ApiResponse, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use super::queries::GetProteinQuery;
use crate::error::ProteinError;
use crate::resolver::ProteinResolver;
use crate::sources::Upstream;

pub fn protein_routes() -> Router<Arc<ProteinResolver>> {
    Router::new().route("/:protein_id", get(get_protein))
}

pub fn pdb_protein_routes() -> Router<Arc<ProteinResolver>> {
    Router::new().route("/:protein_id", get(get_pdb_protein))
}

pub fn uniprot_protein_routes() -> Router<Arc<ProteinResolver>> {
    Router::new().route("/:protein_id", get(get_uniprot_protein))
}

#[tracing::instrument(skip(resolver))]
async fn get_protein(
    State(resolver): State<Arc<ProteinResolver>>,
    Path(protein_id): Path<String>,
) -> Result<Response, ProteinApiError> {
    respond(&resolver, GetProteinQuery::routed(protein_id)).await
}

#[tracing::instrument(skip(resolver))]
async fn get_pdb_protein(
    State(resolver): State<Arc<ProteinResolver>>,
    Path(protein_id): Path<String>,
) -> Result<Response, ProteinApiError> {
    respond(&resolver, GetProteinQuery::pinned(Upstream::Pdb, protein_id)).await
}

#[tracing::instrument(skip(resolver))]
async fn get_uniprot_protein(
    State(resolver): State<Arc<ProteinResolver>>,
    Path(protein_id): Path<String>,
) -> Result<Response, ProteinApiError> {
    respond(&resolver, GetProteinQuery::pinned(Upstream::Uniprot, protein_id)).await
}

async fn respond(
    resolver: &ProteinResolver,
    query: GetProteinQuery,
) -> Result<Response, ProteinApiError> {
    let response = super::queries::get_protein::handle(resolver, query).await?;

    tracing::info!(
        protein_id = %response.protein_id,
        features = response.data.features.len(),
        pdb_ids = response.data.pdb_ids.len(),
        "Resolved protein"
    );

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

/// HTTP face of [`ProteinError`]. The resolver has already logged the
/// failure, so conversion only shapes the envelope.
#[derive(Debug)]
struct ProteinApiError(ProteinError);

impl From<ProteinError> for ProteinApiError {
    fn from(err: ProteinError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ProteinApiError {
    fn into_response(self) -> Response {
        let error = ErrorResponse::new(self.0.code(), self.0.to_string());
        (self.0.status(), Json(error)).into_response()
    }
}

impl std::fmt::Display for ProteinApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
