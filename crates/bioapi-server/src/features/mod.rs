//! Feature modules implementing the BioAPI endpoints
//!
//! Each feature is a vertical slice with its own `queries/` (read
//! operations, one `handle` per query) and `routes.rs` (HTTP wiring).
//!
//! # Features
//!
//! - **protein**: unified protein lookups backed by PDB and UniProtKB

pub mod protein;

use axum::Router;
use std::sync::Arc;

use crate::resolver::ProteinResolver;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    pub resolver: Arc<ProteinResolver>,
}

impl FeatureState {
    pub fn new(resolver: ProteinResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

/// Mounts every feature under its path prefix:
/// - `/protein` - lookup routed by identifier length
/// - `/pdb/protein` - structural lookup
/// - `/uniprot/protein` - annotation lookup
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/protein", protein::protein_routes().with_state(state.resolver.clone()))
        .nest("/pdb/protein", protein::pdb_protein_routes().with_state(state.resolver.clone()))
        .nest(
            "/uniprot/protein",
            protein::uniprot_protein_routes().with_state(state.resolver),
        )
}
