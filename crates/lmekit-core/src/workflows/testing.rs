use crate::core::models::molecule::{Atom, Molecule};
use crate::toolkit::{
    ChargeEngine, ConstraintSet, ForceFieldEngine, MinimizationRequest, MoleculeStore,
    ToolkitError,
};
use nalgebra::{Point3, Vector3};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// In-memory stand-in for the chemistry toolkit.
#[derive(Default)]
pub(crate) struct FakeToolkit {
    pub molecule: Molecule,
    pub charges: Vec<f64>,
    pub fail_minimize: bool,
    pub minimize_requests: RefCell<Vec<(String, usize, ConstraintSet)>>,
    pub written: RefCell<Vec<(PathBuf, String, Molecule)>>,
}

impl FakeToolkit {
    pub fn with_molecule(molecule: Molecule) -> Self {
        Self {
            molecule,
            ..Self::default()
        }
    }
}

impl MoleculeStore for FakeToolkit {
    fn read(&self, _format: &str, _path: &Path) -> Result<Molecule, ToolkitError> {
        Ok(self.molecule.clone())
    }
}

impl ForceFieldEngine for FakeToolkit {
    fn minimize(&self, request: &MinimizationRequest<'_>) -> Result<Molecule, ToolkitError> {
        self.minimize_requests.borrow_mut().push((
            request.forcefield.to_string(),
            request.max_steps,
            request.constraints.clone(),
        ));
        if self.fail_minimize {
            return Err(ToolkitError::UnknownForceField(
                request.forcefield.to_string(),
            ));
        }
        let shifted = self
            .molecule
            .atoms()
            .iter()
            .map(|atom| Atom::new(atom.element.clone(), atom.position + Vector3::x()))
            .collect();
        let minimized = Molecule::new(self.molecule.title.clone(), shifted);

        fs::write(
            request.output,
            format!("{} atoms as {}", minimized.len(), request.output_format),
        )?;
        self.written.borrow_mut().push((
            request.output.to_path_buf(),
            request.output_format.to_string(),
            minimized.clone(),
        ));
        Ok(minimized)
    }
}

impl ChargeEngine for FakeToolkit {
    fn partial_charges(&self, _format: &str, _path: &Path) -> Result<Vec<f64>, ToolkitError> {
        Ok(self.charges.clone())
    }
}

/// A zig-zag butane backbone: C0-C1-C2-C3 in the xy plane, anti conformation,
/// plus an oxygen 3 Å above C0.
pub(crate) fn butane_like() -> Molecule {
    Molecule::new(
        "butane",
        vec![
            Atom::new("C", Point3::new(0.0, 0.0, 0.0)),
            Atom::new("C", Point3::new(1.5, 0.0, 0.0)),
            Atom::new("C", Point3::new(1.5, 1.5, 0.0)),
            Atom::new("C", Point3::new(3.0, 1.5, 0.0)),
            Atom::new("O", Point3::new(0.0, 0.0, 3.0)),
        ],
    )
}

pub(crate) const BUTANE_MAPPING: &str = r#"{
    "ids": {"C1": 0, "C2": 1, "C3": 2, "C4": 3, "Ox": 4},
    "groups": {"backbone": [0, 1, 2, 3], "head": [0, 4]}
}"#;

pub(crate) fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
