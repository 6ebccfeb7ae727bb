use crate::core::utils::geometry;
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoleculeError {
    #[error("Atom index {index} is out of range for a molecule with {len} atoms")]
    AtomOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: String,
    /// Force-field atom type assigned by the toolkit, when the source format carries one.
    pub atom_type: Option<String>,
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(element: impl Into<String>, position: Point3<f64>) -> Self {
        Self {
            element: element.into(),
            atom_type: None,
            position,
        }
    }

    pub fn with_type(mut self, atom_type: impl Into<String>) -> Self {
        self.atom_type = Some(atom_type.into());
        self
    }
}

/// A molecule as seen by the workflows: ordered atoms with coordinates.
///
/// Atom indices are zero-based positions in [`Molecule::atoms`], matching the
/// indices stored in a mapping record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub title: String,
    atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(title: impl Into<String>, atoms: Vec<Atom>) -> Self {
        Self {
            title: title.into(),
            atoms,
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atom(&self, index: usize) -> Result<&Atom, MoleculeError> {
        self.atoms.get(index).ok_or(MoleculeError::AtomOutOfRange {
            index,
            len: self.atoms.len(),
        })
    }

    /// The toolkit atom type, falling back to the element symbol for untyped atoms.
    pub fn atom_type(&self, index: usize) -> Result<&str, MoleculeError> {
        self.atom(index)
            .map(|atom| atom.atom_type.as_deref().unwrap_or(&atom.element))
    }

    pub fn distance(&self, a: usize, b: usize) -> Result<f64, MoleculeError> {
        Ok(geometry::distance(
            &self.atom(a)?.position,
            &self.atom(b)?.position,
        ))
    }

    pub fn angle(&self, a: usize, b: usize, c: usize) -> Result<f64, MoleculeError> {
        Ok(geometry::angle_degrees(
            &self.atom(a)?.position,
            &self.atom(b)?.position,
            &self.atom(c)?.position,
        ))
    }

    pub fn torsion(&self, a: usize, b: usize, c: usize, d: usize) -> Result<f64, MoleculeError> {
        Ok(geometry::torsion_degrees(
            &self.atom(a)?.position,
            &self.atom(b)?.position,
            &self.atom(c)?.position,
            &self.atom(d)?.position,
        ))
    }
}
