//! Provides the file formats spoken with the external chemistry toolkit.
//!
//! Molecules are read back from the toolkit as TRIPOS mol2 documents, which
//! carry atom types and partial charges. Minimized coordinates come back as
//! plain XYZ. Toolkit format codes are inferred from file extensions.

pub mod formats;
pub mod mol2;
pub mod traits;
pub mod xyz;
