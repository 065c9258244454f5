//! BioAPI Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging setup for the BioAPI workspace.
//!
//! - **Error Handling**: [`BioApiError`] and the [`Result`] alias
//! - **Logging**: [`logging::LogConfig`] and [`logging::init_logging`]
//!
//! # Example
//!
//! ```no_run
//! use bioapi_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("gateway starting");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

pub use error::{BioApiError, Result};
