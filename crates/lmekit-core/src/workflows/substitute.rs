use super::error::WorkflowError;
use super::files::{read_text, write_text};
use crate::core::mapping::{MappingRecord, render_indices};
use std::path::PathBuf;
use tracing::{info, warn};

/// Replaces a placeholder in a text file with the indices of a named atom or group.
#[derive(Debug, Clone, PartialEq)]
pub struct SubstituteConfig {
    /// The file rewritten in place.
    pub input: PathBuf,
    pub pattern: String,
    pub separator: String,
    pub name: String,
    pub mapping: PathBuf,
    pub one_based: bool,
}

impl SubstituteConfig {
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.pattern.is_empty() {
            return Err(WorkflowError::Config(
                "`pattern` must not be empty".to_string(),
            ));
        }
        if self.name.is_empty() {
            return Err(WorkflowError::Config("`name` must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Replaces every occurrence of `pattern`, returning the new text and the
/// number of replacements.
pub fn substitute(content: &str, pattern: &str, replacement: &str) -> (String, usize) {
    let count = content.matches(pattern).count();
    (content.replace(pattern, replacement), count)
}

pub fn run(config: &SubstituteConfig) -> Result<usize, WorkflowError> {
    config.validate()?;

    let content = read_text(&config.input)?;
    let mapping = MappingRecord::load(&config.mapping)?;
    let indices = mapping.resolver().resolve(&config.name)?;
    let replacement = render_indices(&indices, &config.separator, config.one_based);

    let (updated, count) = substitute(&content, &config.pattern, &replacement);
    if count == 0 {
        warn!(
            "Pattern '{}' does not occur in {:?}; file left unchanged.",
            config.pattern, config.input
        );
        return Ok(0);
    }

    write_text(&config.input, &updated)?;
    info!(
        "Replaced {} occurrence(s) of '{}' with '{}' in {:?}",
        count, config.pattern, replacement, config.input
    );
    Ok(count)
}
