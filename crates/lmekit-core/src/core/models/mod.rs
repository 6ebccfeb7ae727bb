//! The molecule value passed between workflows and the external toolkit.
//!
//! Only what the workflows need is kept: element symbols and Cartesian
//! coordinates in atom order. Topology and force-field typing stay inside the
//! toolkit.

pub mod molecule;

pub use molecule::{Atom, Molecule, MoleculeError};
