//! Upstream protein databases
//!
//! Each source owns a wire model describing the raw JSON it serves, a fetch
//! client, and a pure adapter into [`crate::models::ProteinRecord`]:
//!
//! - **pdb**: RCSB Protein Data Bank, 4-character entry IDs
//! - **uniprot**: UniProtKB, 6-character accessions
//! - **links**: URLs derived from structural identifiers

pub mod links;
pub mod pdb;
pub mod uniprot;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::ProteinError;
use crate::upstream::HttpFetch;

/// The two databases an identifier can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Upstream {
    Pdb,
    Uniprot,
}

impl Upstream {
    /// Identifier length owned by this source
    pub const fn id_length(self) -> usize {
        match self {
            Upstream::Pdb => 4,
            Upstream::Uniprot => 6,
        }
    }

    pub fn for_id_length(len: usize) -> Option<Self> {
        [Upstream::Pdb, Upstream::Uniprot]
            .into_iter()
            .find(|u| u.id_length() == len)
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Pdb => write!(f, "PDB"),
            Upstream::Uniprot => write!(f, "UniProt"),
        }
    }
}

/// Treat an explicit JSON `null` like an absent key.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// GET `url` and return the body of a 2xx response.
pub(crate) async fn get_text(
    http: &dyn HttpFetch,
    upstream: Upstream,
    id: &str,
    url: &str,
) -> Result<String, ProteinError> {
    let response = http
        .get(url)
        .await
        .map_err(|e| ProteinError::unavailable(upstream, id, e.to_string()))?;

    if !response.is_success() {
        return Err(ProteinError::UpstreamError {
            upstream,
            id: id.to_string(),
            status: Some(response.status),
            message: format!("Failed to fetch protein data for ID {}", id),
        });
    }

    Ok(response.body)
}

pub(crate) fn parse_json<T: DeserializeOwned>(
    upstream: Upstream,
    id: &str,
    body: &str,
) -> Result<T, ProteinError> {
    serde_json::from_str(body).map_err(|e| ProteinError::UpstreamError {
        upstream,
        id: id.to_string(),
        status: None,
        message: format!("Malformed {} entry: {}", upstream, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_length_routing() {
        assert_eq!(Upstream::for_id_length(4), Some(Upstream::Pdb));
        assert_eq!(Upstream::for_id_length(6), Some(Upstream::Uniprot));
        assert_eq!(Upstream::for_id_length(3), None);
        assert_eq!(Upstream::for_id_length(5), None);
        assert_eq!(Upstream::for_id_length(10), None);
    }

    #[derive(Debug, Default, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "nullable")]
        names: Vec<String>,
    }

    #[test]
    fn test_nullable_treats_null_as_default() {
        let held: Holder = serde_json::from_str(r#"{"names": null}"#).unwrap();
        assert!(held.names.is_empty());

        let held: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(held.names.is_empty());

        let held: Holder = serde_json::from_str(r#"{"names": ["a"]}"#).unwrap();
        assert_eq!(held.names, vec!["a"]);
    }

    #[test]
    fn test_parse_json_failure_has_no_status() {
        let err = parse_json::<Holder>(Upstream::Pdb, "4HHB", "not json").unwrap_err();
        assert!(matches!(err, ProteinError::UpstreamError { status: None, .. }));
    }
}
