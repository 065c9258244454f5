//! Links derived from structural identifiers

/// Host serving gzipped PDB-format coordinate files
pub const PDB_FILES_HOST: &str = "files.rcsb.org";

/// Bulk-download URL for a 4-character structural ID.
///
/// The ID is substituted as given; callers pass well-formed identifiers.
pub fn download_link(structural_id: &str) -> String {
    format!("https://{}/download/{}.pdb.gz", PDB_FILES_HOST, structural_id)
}

/// [`download_link`] for the first ID, or an empty string when there is none.
pub fn first_download_link<S: AsRef<str>>(structural_ids: &[S]) -> String {
    structural_ids
        .first()
        .map(|id| download_link(id.as_ref()))
        .unwrap_or_default()
}
