//! BioAPI Server Library
//!
//! One lookup endpoint in front of two protein databases.
//!
//! # Overview
//!
//! A protein identifier's shape decides where it is fetched from:
//!
//! - **4 characters** (`4HHB`): an RCSB Protein Data Bank entry
//! - **6 characters** (`P69905`): a UniProtKB accession
//!
//! Both sources are normalized into the same [`models::ProteinRecord`], so
//! callers never deal with either database's raw schema.
//!
//! # Architecture
//!
//! - [`upstream`]: the outbound HTTP transport behind the [`upstream::HttpFetch`] trait
//! - [`sources`]: per-database wire models, fetch clients and pure adapters
//! - [`resolver`]: identifier validation and routing
//! - [`features`]: axum routes and query handlers
//! - [`api`]: router assembly and serving
//!
//! # Example
//!
//! ```no_run
//! use bioapi_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config, async { let _ = tokio::signal::ctrl_c().await; }).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;
pub mod resolver;
pub mod sources;
pub mod upstream;

// Re-export commonly used types
pub use error::ProteinError;
pub use models::ProteinRecord;
pub use resolver::ProteinResolver;
