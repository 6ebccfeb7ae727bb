//! # Toolkit Module
//!
//! The external chemistry toolkit is an injected capability. Workflows only see
//! the three traits below. [`obabel::ObabelToolkit`] implements all of them
//! with Open Babel: conversions through the `obabel` program, minimization
//! through its Python bindings. Tests substitute in-memory fakes.

pub mod constraints;
pub mod error;
pub mod obabel;

pub use constraints::{AngleConstraint, ConstraintSet, DistanceConstraint, TorsionConstraint};
pub use error::ToolkitError;
pub use obabel::{ObabelConfig, ObabelToolkit};

use crate::core::models::molecule::Molecule;
use std::path::Path;

/// Reads molecules in the toolkit's file formats.
pub trait MoleculeStore {
    fn read(&self, format: &str, path: &Path) -> Result<Molecule, ToolkitError>;
}

/// Everything a force-field engine needs for one constrained minimization.
#[derive(Debug, Clone, Copy)]
pub struct MinimizationRequest<'a> {
    pub input: &'a Path,
    pub input_format: &'a str,
    pub output: &'a Path,
    pub output_format: &'a str,
    pub forcefield: &'a str,
    /// Zero-based constraints against the atoms of `input`.
    pub constraints: &'a ConstraintSet,
    pub max_steps: usize,
}

/// Runs a constrained force-field geometry optimization.
///
/// The engine writes `output` itself, from the same toolkit molecule it read, so
/// everything the output format carries besides coordinates is kept. `output` is
/// only written once the optimization has finished. The minimized molecule is
/// returned as well.
pub trait ForceFieldEngine {
    fn minimize(&self, request: &MinimizationRequest<'_>) -> Result<Molecule, ToolkitError>;
}

/// Assigns one partial charge per atom, in atom order.
pub trait ChargeEngine {
    fn partial_charges(&self, format: &str, path: &Path) -> Result<Vec<f64>, ToolkitError>;
}
