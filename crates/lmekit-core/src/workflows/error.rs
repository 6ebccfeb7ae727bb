use super::check_distance::GeometryViolation;
use crate::core::mapping::{MappingError, ResolveError};
use crate::core::models::molecule::MoleculeError;
use crate::toolkit::ToolkitError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("Toolkit call failed: {0}")]
    Toolkit(#[from] ToolkitError),

    #[error(transparent)]
    Molecule(#[from] MoleculeError),

    #[error(transparent)]
    Geometry(#[from] GeometryViolation),

    #[error("Atom index {index} is out of range for a molecule with {len} atoms")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Bond {bond} references atom {atom}, but only {len} atoms are defined")]
    BondOutOfRange { bond: usize, atom: usize, len: usize },

    #[error("Failed to read '{path}': {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed JSON in '{path}': {source}", path = path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
