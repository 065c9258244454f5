//! Protein lookup endpoints
//!
//! - `/protein/:protein_id` routes by identifier length
//! - `/pdb/protein/:protein_id` accepts 4-character PDB IDs only
//! - `/uniprot/protein/:protein_id` accepts 6-character UniProt accessions only

pub mod queries;
pub mod routes;

pub use queries::{GetProteinQuery, GetProteinResponse};

pub use routes::{pdb_protein_routes, protein_routes, uniprot_protein_routes};
