pub mod get_protein;

pub use get_protein::{handle, GetProteinQuery, GetProteinResponse};
