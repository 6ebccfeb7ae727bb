use super::error::WorkflowError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

pub(crate) fn read_text(path: &Path) -> Result<String, WorkflowError> {
    debug!("Reading {:?}", path);
    fs::read_to_string(path).map_err(|source| WorkflowError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, WorkflowError> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|source| WorkflowError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_text(path: &Path, content: &str) -> Result<(), WorkflowError> {
    debug!("Writing {} byte(s) to {:?}", content.len(), path);
    fs::write(path, content).map_err(|source| WorkflowError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), WorkflowError> {
    if value.trim().is_empty() {
        return Err(WorkflowError::Config(format!("`{}` must not be empty", field)));
    }
    Ok(())
}
