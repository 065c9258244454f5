//! UniProtKB REST wire format
//!
//! `GET /uniprotkb/{accession}?format=json`, trimmed to the blocks the adapter
//! reads. Every block is optional upstream and defaults to empty here.

use serde::{Deserialize, Serialize};

use crate::sources::nullable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniprotEntry {
    pub primary_accession: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub protein_description: ProteinDescription,
    #[serde(default, deserialize_with = "nullable")]
    pub organism: Organism,
    #[serde(default, deserialize_with = "nullable")]
    pub entry_audit: EntryAudit,
    #[serde(default, deserialize_with = "nullable")]
    pub comments: Vec<Comment>,
    #[serde(default, deserialize_with = "nullable")]
    pub features: Vec<Feature>,
    #[serde(
        rename = "uniProtKBCrossReferences",
        default,
        deserialize_with = "nullable"
    )]
    pub cross_references: Vec<CrossReference>,
    /// FASTA text from the `?format=fasta` call; the JSON `sequence` object is
    /// not read.
    #[serde(skip)]
    pub sequence: String,
}

/// `{"value": ...}` wrapper used all over the UniProt schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinDescription {
    #[serde(default, deserialize_with = "nullable")]
    pub recommended_name: RecommendedName,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedName {
    #[serde(default, deserialize_with = "nullable")]
    pub full_name: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organism {
    pub scientific_name: Option<String>,
    pub common_name: Option<String>,
    pub taxon_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryAudit {
    pub first_public_date: Option<String>,
    pub last_annotation_update_date: Option<String>,
    pub sequence_version: Option<i64>,
    pub entry_version: Option<i64>,
}

/// `commentType` discriminator. Topics the adapter does not project land in
/// `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentType {
    #[serde(rename = "FUNCTION")]
    Function,
    #[serde(rename = "SUBUNIT")]
    Subunit,
    #[serde(rename = "SUBCELLULAR LOCATION")]
    SubcellularLocation,
    #[serde(rename = "DISEASE")]
    Disease,
    #[serde(rename = "ALTERNATIVE PRODUCTS")]
    AlternativeProducts,
    #[default]
    #[serde(other)]
    Other,
}

/// One element of the polymorphic `comments` list. Which payload fields are
/// populated depends on `comment_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub comment_type: CommentType,
    #[serde(default, deserialize_with = "nullable")]
    pub texts: Vec<Value>,
    #[serde(default, deserialize_with = "nullable")]
    pub subcellular_locations: Vec<SubcellularLocation>,
    pub disease: Option<Disease>,
    #[serde(default, deserialize_with = "nullable")]
    pub isoforms: Vec<Isoform>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubcellularLocation {
    #[serde(default, deserialize_with = "nullable")]
    pub location: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disease {
    pub disease_id: Option<String>,
    pub acronym: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub disease_cross_reference: CrossReference,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Isoform {
    #[serde(default, deserialize_with = "nullable")]
    pub name: Value,
    #[serde(default, deserialize_with = "nullable")]
    pub isoform_ids: Vec<String>,
    pub isoform_sequence_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: FeatureLocation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureLocation {
    #[serde(default, deserialize_with = "nullable")]
    pub start: Position,
    #[serde(default, deserialize_with = "nullable")]
    pub end: Position,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub value: Option<i64>,
    pub modifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossReference {
    pub database: Option<String>,
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_type_discriminator() {
        let comments: Vec<Comment> = serde_json::from_str(
            r#"[
                {"commentType": "FUNCTION", "texts": [{"value": "Binds calcium"}]},
                {"commentType": "SUBCELLULAR LOCATION"},
                {"commentType": "ALTERNATIVE PRODUCTS", "events": ["Alternative splicing"]},
                {"commentType": "MASS SPECTROMETRY", "molWeight": 15126.0}
            ]"#,
        )
        .unwrap();

        let types: Vec<_> = comments.iter().map(|c| c.comment_type).collect();
        assert_eq!(
            types,
            vec![
                CommentType::Function,
                CommentType::SubcellularLocation,
                CommentType::AlternativeProducts,
                CommentType::Other,
            ]
        );
    }

    #[test]
    fn test_json_sequence_object_is_not_read() {
        let entry: UniprotEntry = serde_json::from_str(
            r#"{"primaryAccession": "P69905", "sequence": {"value": "MVLS", "length": 4}}"#,
        )
        .unwrap();

        assert_eq!(entry.primary_accession.as_deref(), Some("P69905"));
        assert_eq!(entry.sequence, "");
    }

    #[test]
    fn test_empty_object_deserializes() {
        let entry: UniprotEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry, UniprotEntry::default());
    }
}
