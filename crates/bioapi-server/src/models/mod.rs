//! Unified protein model
//!
//! Both upstream pipelines normalize into [`ProteinRecord`]. Every field is
//! always present in the serialized form; values the source did not supply
//! are empty strings, zeros, or empty lists.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinRecord {
    pub primary_accession: String,
    pub recommended_name: String,
    pub organism: Organism,
    pub entry_audit: EntryAudit,
    pub functions: Vec<String>,
    pub subunit_structure: Vec<String>,
    pub subcellular_locations: Vec<String>,
    pub disease_associations: Vec<DiseaseAssociation>,
    pub isoforms: Vec<Isoform>,
    pub features: Vec<Feature>,
    /// Structural database identifiers cross-referenced by this entry
    pub pdb_ids: Vec<String>,
    /// Structure download URL; empty when there is no structural cross-reference
    pub pdb_link: String,
    pub sequence: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organism {
    pub scientific_name: String,
    pub common_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAudit {
    pub first_public_date: String,
    pub last_annotation_update_date: String,
    pub sequence_version: i64,
    pub entry_version: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseAssociation {
    pub disease_name: String,
    pub acronym: String,
    /// Name of the database the disease is catalogued in (e.g. "MIM")
    pub cross_reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Isoform {
    pub isoform_name: String,
    pub sequence_status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    /// "{start} - {end}"
    pub location: String,
    pub description: String,
}
