use crate::core::models::molecule::Molecule;
use std::error::Error;
use std::io::{self, BufRead};

/// Defines the interface for parsing a molecular format returned by the toolkit.
///
/// Implementors handle the format-specific parsing; the toolkit backend decides
/// which format it asks for.
pub trait MolecularFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads the first molecule from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Molecule, Self::Error>;
}
