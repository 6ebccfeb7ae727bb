use super::error::WorkflowError;
use super::files::{read_json, require_non_empty, write_text};
use crate::core::mapping::{MappingRecord, Query};
use crate::toolkit::ChargeEngine;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ChargesConfig {
    /// JSON list of queries: integers are source indices, strings are names.
    pub queries: PathBuf,
    pub input: PathBuf,
    pub format: String,
    pub mapping: PathBuf,
    pub output: PathBuf,
}

impl ChargesConfig {
    pub fn validate(&self) -> Result<(), WorkflowError> {
        require_non_empty(&self.format, "format")
    }
}

/// Picks the charges of `indices`, in order, from a per-atom charge table.
pub fn select_charges(charges: &[f64], indices: &[usize]) -> Result<Vec<f64>, WorkflowError> {
    indices
        .iter()
        .map(|&index| {
            charges
                .get(index)
                .copied()
                .ok_or(WorkflowError::IndexOutOfRange {
                    index,
                    len: charges.len(),
                })
        })
        .collect()
}

pub fn format_charges(charges: &[f64]) -> String {
    charges
        .iter()
        .map(|charge| charge.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn run(config: &ChargesConfig, engine: &impl ChargeEngine) -> Result<Vec<f64>, WorkflowError> {
    config.validate()?;

    let queries: Vec<Query> = read_json(&config.queries)?;
    let mapping = MappingRecord::load(&config.mapping)?;
    let indices = mapping.resolver().resolve_all(&queries)?;
    info!(
        "Resolved {} queries to {} atom(s).",
        queries.len(),
        indices.len()
    );

    let charges = engine.partial_charges(&config.format, &config.input)?;
    if let Some(declared) = mapping.len {
        if declared != charges.len() {
            warn!(
                "Mapping declares {} atoms but the toolkit assigned {} charges.",
                declared,
                charges.len()
            );
        }
    }

    let selected = select_charges(&charges, &indices)?;
    write_text(&config.output, &format_charges(&selected))?;
    info!(
        "Wrote {} charge(s) to {:?}",
        selected.len(),
        config.output
    );
    Ok(selected)
}
