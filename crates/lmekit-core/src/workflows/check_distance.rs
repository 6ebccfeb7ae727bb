use super::error::WorkflowError;
use super::files::require_non_empty;
use crate::core::mapping::MappingRecord;
use crate::toolkit::MoleculeStore;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// A measured distance outside the accepted window.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryViolation {
    #[error("Atoms get too close: {distance:.4} Å < {min} Å ({type_a}, {type_b})")]
    TooClose {
        distance: f64,
        min: f64,
        type_a: String,
        type_b: String,
    },

    #[error("Atoms get too far away: {distance:.4} Å > {max} Å ({type_a}, {type_b})")]
    TooFar {
        distance: f64,
        max: f64,
        type_a: String,
        type_b: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceCheckConfig {
    pub input: PathBuf,
    pub format: String,
    pub mapping: PathBuf,
    pub atom_a: String,
    pub atom_b: String,
    pub min: f64,
    pub max: f64,
}

impl DistanceCheckConfig {
    pub fn validate(&self) -> Result<(), WorkflowError> {
        require_non_empty(&self.format, "format")?;
        require_non_empty(&self.atom_a, "atom_a")?;
        require_non_empty(&self.atom_b, "atom_b")?;
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(WorkflowError::Config(format!(
                "distance bounds must be finite numbers (min = {}, max = {})",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(WorkflowError::Config(format!(
                "minimum distance {} is larger than maximum distance {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceReport {
    pub atoms: [usize; 2],
    pub distance: f64,
}

/// Passes iff `min <= distance <= max`.
pub fn check_window(
    distance: f64,
    min: f64,
    max: f64,
    type_a: &str,
    type_b: &str,
) -> Result<(), GeometryViolation> {
    if distance < min {
        return Err(GeometryViolation::TooClose {
            distance,
            min,
            type_a: type_a.to_string(),
            type_b: type_b.to_string(),
        });
    }
    if distance > max {
        return Err(GeometryViolation::TooFar {
            distance,
            max,
            type_a: type_a.to_string(),
            type_b: type_b.to_string(),
        });
    }
    Ok(())
}

pub fn run(
    config: &DistanceCheckConfig,
    store: &impl MoleculeStore,
) -> Result<DistanceReport, WorkflowError> {
    config.validate()?;

    let mapping = MappingRecord::load(&config.mapping)?;
    let resolver = mapping.resolver();
    let a = resolver.resolve_atom(&config.atom_a)?;
    let b = resolver.resolve_atom(&config.atom_b)?;
    debug!(
        "Resolved '{}' -> {} and '{}' -> {}",
        config.atom_a, a, config.atom_b, b
    );

    let molecule = store.read(&config.format, &config.input)?;
    let distance = molecule.distance(a, b)?;

    check_window(
        distance,
        config.min,
        config.max,
        molecule.atom_type(a)?,
        molecule.atom_type(b)?,
    )?;

    info!(
        "Distance between atoms {} and {} is {:.4} Å, within [{}, {}].",
        a, b, distance, config.min, config.max
    );
    Ok(DistanceReport {
        atoms: [a, b],
        distance,
    })
}
