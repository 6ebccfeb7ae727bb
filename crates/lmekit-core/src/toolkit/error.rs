use crate::core::io::mol2::Mol2Error;
use crate::core::io::xyz::XyzError;
use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with status {}: {stderr}", .code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("'{program}' produced output that is not valid UTF-8")]
    Utf8 {
        program: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Unknown force field '{0}'")]
    UnknownForceField(String),

    #[error("Atom index {0} cannot be numbered from one")]
    IndexOverflow(usize),

    #[error("Failed to encode the minimization job: {0}")]
    Job(#[from] serde_json::Error),

    #[error("Toolkit returned unreadable coordinates: {0}")]
    Xyz(#[from] XyzError),

    #[error("Toolkit returned an unreadable charge table: {0}")]
    Mol2(#[from] Mol2Error),

    #[error("I/O error while talking to the toolkit: {0}")]
    Io(#[from] io::Error),
}
