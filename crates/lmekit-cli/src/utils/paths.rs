use crate::error::{CliError, Result};
use lmekit::core::io::formats::infer_format;
use lmekit::core::mapping::MappingRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Returns the explicit format code, or the one implied by the file extension.
pub fn resolve_format(explicit: Option<&str>, path: &Path, role: &str) -> Result<String> {
    if let Some(format) = explicit {
        return Ok(format.to_string());
    }
    let format = infer_format(path).ok_or_else(|| {
        CliError::Argument(format!(
            "Cannot infer the {} format from {:?}; pass the format explicitly.",
            role, path
        ))
    })?;
    debug!("Inferred {} format '{}' from {:?}", role, format, path);
    Ok(format.to_string())
}

/// Returns the explicit mapping path, or the `.map.json` side-car of `input`.
pub fn resolve_mapping(explicit: Option<&Path>, input: &Path) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| MappingRecord::sidecar_path(input))
}
