//! Lookup failures

use axum::http::StatusCode;
use thiserror::Error;

use crate::sources::Upstream;

/// Why a protein lookup produced no record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProteinError {
    /// Rejected before any network call
    #[error("Invalid protein ID format: '{id}'. {reason}")]
    InvalidIdentifier { id: String, reason: String },

    /// The upstream call never completed (connect failure, timeout)
    #[error("{upstream} is unavailable for protein ID {id}: {message}")]
    UpstreamUnavailable {
        upstream: Upstream,
        id: String,
        message: String,
    },

    /// The upstream answered with a non-success status, or with a body that
    /// does not match its schema (`status` is `None`)
    #[error("{message}")]
    UpstreamError {
        upstream: Upstream,
        id: String,
        status: Option<u16>,
        message: String,
    },
}

impl ProteinError {
    pub fn invalid(id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    pub fn unavailable(upstream: Upstream, id: &str, message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            upstream,
            id: id.to_string(),
            message: message.into(),
        }
    }

    /// 400 for malformed identifiers, 500 for anything upstream
    pub fn status(&self) -> StatusCode {
        match self {
            ProteinError::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
            ProteinError::UpstreamUnavailable { .. } | ProteinError::UpstreamError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ProteinError::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
            ProteinError::UpstreamUnavailable { .. } => "UPSTREAM_UNAVAILABLE",
            ProteinError::UpstreamError { .. } => "UPSTREAM_ERROR",
        }
    }
}
