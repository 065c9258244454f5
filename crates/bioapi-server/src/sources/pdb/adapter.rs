//! RCSB entry -> unified record

use super::models::PdbEntry;
use crate::models::{EntryAudit, ProteinRecord};
use crate::sources::links::download_link;

/// Structural entries carry identifiers and audit dates only; every
/// annotation field stays empty.
pub fn normalize(entry: &PdbEntry) -> ProteinRecord {
    let accession = &entry.rcsb_accession_info;
    let primary_accession = entry.rcsb_entry_container_identifiers.entry_id.clone();

    ProteinRecord {
        pdb_link: download_link(&primary_accession),
        primary_accession,
        entry_audit: EntryAudit {
            first_public_date: accession.initial_release_date.clone().unwrap_or_default(),
            last_annotation_update_date: accession.revision_date.clone().unwrap_or_default(),
            sequence_version: accession.major_revision.unwrap_or_default(),
            entry_version: accession.minor_revision.unwrap_or_default(),
        },
        ..ProteinRecord::default()
    }
}
