//! RCSB core entry wire format
//!
//! Mirrors `GET /rest/v1/core/entry/{id}` closely enough to deserialize real
//! responses. Only the container identifiers and accession info feed the
//! unified record; the rest is kept so the shape is documented and typed.
//! Keys not listed here are ignored.

use serde::{Deserialize, Serialize};

use crate::sources::nullable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdbEntry {
    #[serde(default, deserialize_with = "nullable")]
    pub audit_author: Vec<Author>,
    #[serde(default, deserialize_with = "nullable")]
    pub cell: Cell,
    #[serde(default, deserialize_with = "nullable")]
    pub citation: Vec<Citation>,
    #[serde(default, deserialize_with = "nullable")]
    pub diffrn: Vec<Diffrn>,
    #[serde(default, deserialize_with = "nullable")]
    pub exptl: Vec<Exptl>,
    #[serde(default, deserialize_with = "nullable")]
    pub exptl_crystal: Vec<ExptlCrystal>,
    #[serde(default, deserialize_with = "nullable")]
    pub pdbx_audit_revision_category: Vec<RevisionCategory>,
    #[serde(default, deserialize_with = "nullable")]
    pub pdbx_audit_revision_details: Vec<RevisionDetails>,
    #[serde(default, deserialize_with = "nullable")]
    pub pdbx_audit_revision_group: Vec<RevisionGroup>,
    #[serde(default, deserialize_with = "nullable")]
    pub pdbx_audit_revision_history: Vec<RevisionHistory>,
    #[serde(default, deserialize_with = "nullable")]
    pub rcsb_accession_info: RcsbAccessionInfo,
    /// Required: an entry without its container block is rejected.
    pub rcsb_entry_container_identifiers: RcsbEntryContainerIdentifiers,
    #[serde(default, deserialize_with = "nullable")]
    pub rcsb_entry_info: RcsbEntryInfo,
    #[serde(rename = "struct", default, deserialize_with = "nullable")]
    pub structure: Struct,
    #[serde(default, deserialize_with = "nullable")]
    pub symmetry: Symmetry,
    pub rcsb_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: Option<String>,
    pub pdbx_ordinal: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub angle_alpha: Option<f64>,
    pub angle_beta: Option<f64>,
    pub angle_gamma: Option<f64>,
    pub length_a: Option<f64>,
    pub length_b: Option<f64>,
    pub length_c: Option<f64>,
    #[serde(alias = "Z_PDB")]
    pub zpdb: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub country: Option<String>,
    pub id: Option<String>,
    pub journal_abbrev: Option<String>,
    pub journal_volume: Option<String>,
    pub page_first: Option<String>,
    pub page_last: Option<String>,
    pub title: Option<String>,
    pub year: Option<i64>,
    #[serde(alias = "pdbx_database_id_DOI")]
    pub pdbx_database_id_doi: Option<String>,
    #[serde(alias = "pdbx_database_id_PubMed")]
    pub pdbx_database_id_pub_med: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub rcsb_authors: Vec<String>,
    pub rcsb_is_primary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diffrn {
    pub crystal_id: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exptl {
    pub method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExptlCrystal {
    pub density_matthews: Option<f64>,
    pub density_percent_sol: Option<f64>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionCategory {
    pub category: Option<String>,
    pub data_content_type: Option<String>,
    pub ordinal: Option<i64>,
    pub revision_ordinal: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionDetails {
    pub data_content_type: Option<String>,
    pub details: Option<String>,
    pub ordinal: Option<i64>,
    pub provider: Option<String>,
    pub revision_ordinal: Option<i64>,
    #[serde(rename = "type")]
    pub details_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionGroup {
    pub data_content_type: Option<String>,
    pub group: Option<String>,
    pub ordinal: Option<i64>,
    pub revision_ordinal: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionHistory {
    pub data_content_type: Option<String>,
    pub major_revision: Option<i64>,
    pub minor_revision: Option<i64>,
    pub ordinal: Option<i64>,
    pub revision_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RcsbAccessionInfo {
    pub deposit_date: Option<String>,
    pub has_released_experimental_data: Option<String>,
    pub initial_release_date: Option<String>,
    pub major_revision: Option<i64>,
    pub minor_revision: Option<i64>,
    pub revision_date: Option<String>,
    pub status_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcsbEntryContainerIdentifiers {
    /// Canonical entry ID, e.g. "4HHB"
    pub entry_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub assembly_ids: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub entity_ids: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub model_ids: Vec<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub non_polymer_entity_ids: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub polymer_entity_ids: Vec<String>,
    pub rcsb_id: Option<String>,
    pub pubmed_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RcsbEntryInfo {
    pub assembly_count: Option<i64>,
    pub deposited_atom_count: Option<i64>,
    pub deposited_model_count: Option<i64>,
    pub experimental_method: Option<String>,
    pub molecular_weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Symmetry {
    #[serde(alias = "Int_Tables_number")]
    pub int_tables_number: Option<i64>,
    #[serde(alias = "space_group_name_H_M")]
    pub space_group_name_hm: Option<String>,
}
