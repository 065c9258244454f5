//! UniProtKB entry -> unified record

use super::models::{Comment, CommentType, Position, UniprotEntry};
use crate::models::{
    DiseaseAssociation, EntryAudit, Feature, Isoform, Organism, ProteinRecord,
};
use crate::sources::links::first_download_link;

/// Cross-reference database tag for structural entries
const PDB_DATABASE: &str = "PDB";

/// Rendered for a feature boundary the entry leaves unset
const MISSING_POSITION: &str = "None";

pub fn normalize(entry: &UniprotEntry) -> ProteinRecord {
    let pdb_ids: Vec<String> = entry
        .cross_references
        .iter()
        .filter(|x| x.database.as_deref() == Some(PDB_DATABASE))
        .filter_map(|x| x.id.clone())
        .collect();

    ProteinRecord {
        primary_accession: entry.primary_accession.clone().unwrap_or_default(),
        recommended_name: entry
            .protein_description
            .recommended_name
            .full_name
            .value
            .clone()
            .unwrap_or_default(),
        organism: Organism {
            scientific_name: entry.organism.scientific_name.clone().unwrap_or_default(),
            common_name: entry.organism.common_name.clone().unwrap_or_default(),
        },
        entry_audit: EntryAudit {
            first_public_date: entry.entry_audit.first_public_date.clone().unwrap_or_default(),
            last_annotation_update_date: entry
                .entry_audit
                .last_annotation_update_date
                .clone()
                .unwrap_or_default(),
            sequence_version: entry.entry_audit.sequence_version.unwrap_or_default(),
            entry_version: entry.entry_audit.entry_version.unwrap_or_default(),
        },
        functions: first_texts(&entry.comments, CommentType::Function),
        subunit_structure: first_texts(&entry.comments, CommentType::Subunit),
        subcellular_locations: of_type(&entry.comments, CommentType::SubcellularLocation)
            .flat_map(|c| &c.subcellular_locations)
            .map(|l| l.location.value.clone().unwrap_or_default())
            .collect(),
        disease_associations: of_type(&entry.comments, CommentType::Disease)
            .filter_map(|c| c.disease.as_ref())
            .map(|disease| DiseaseAssociation {
                disease_name: disease.description.clone().unwrap_or_default(),
                acronym: disease.acronym.clone().unwrap_or_default(),
                cross_reference: disease
                    .disease_cross_reference
                    .database
                    .clone()
                    .unwrap_or_default(),
            })
            .collect(),
        isoforms: of_type(&entry.comments, CommentType::AlternativeProducts)
            .flat_map(|c| &c.isoforms)
            .map(|i| Isoform {
                isoform_name: i.name.value.clone().unwrap_or_default(),
                sequence_status: i.isoform_sequence_status.clone().unwrap_or_default(),
            })
            .collect(),
        features: entry
            .features
            .iter()
            .map(|f| Feature {
                feature_type: f.feature_type.clone().unwrap_or_default(),
                location: format!(
                    "{} - {}",
                    render_position(&f.location.start),
                    render_position(&f.location.end)
                ),
                description: f.description.clone().unwrap_or_default(),
            })
            .collect(),
        pdb_link: first_download_link(&pdb_ids),
        pdb_ids,
        sequence: entry.sequence.clone(),
    }
}

fn of_type(comments: &[Comment], kind: CommentType) -> impl Iterator<Item = &Comment> {
    comments.iter().filter(move |c| c.comment_type == kind)
}

/// One entry per matching comment: its first text, or "" when it has none.
fn first_texts(comments: &[Comment], kind: CommentType) -> Vec<String> {
    of_type(comments, kind)
        .map(|c| {
            c.texts
                .first()
                .and_then(|t| t.value.clone())
                .unwrap_or_default()
        })
        .collect()
}

fn render_position(position: &Position) -> String {
    position
        .value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING_POSITION.to_string())
}
