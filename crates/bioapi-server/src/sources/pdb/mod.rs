//! RCSB Protein Data Bank
//!
//! Entries are keyed by 4-character IDs such as `4HHB`.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::normalize;
pub use client::PdbClient;
pub use models::PdbEntry;

/// Default RCSB core entry endpoint
pub const DEFAULT_BASE_URL: &str = "https://data.rcsb.org/rest/v1/core/entry";
