//! UniProt Knowledgebase
//!
//! Entries are keyed by 6-character accessions such as `P69905`.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::normalize;
pub use client::UniprotClient;
pub use models::UniprotEntry;

/// Default UniProtKB REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://rest.uniprot.org/uniprotkb";
