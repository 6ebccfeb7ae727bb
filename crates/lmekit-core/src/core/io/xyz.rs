use crate::core::io::traits::MolecularFile;
use crate::core::models::molecule::{Atom, Molecule};
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
    #[error("Expected {expected} atom records but found {found}")]
    Truncated { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Input is empty")]
    Empty,
    #[error("Invalid atom count '{0}'")]
    InvalidCount(String),
    #[error("Atom record needs an element and three coordinates")]
    ShortRecord,
    #[error("Invalid coordinate '{0}'")]
    InvalidFloat(String),
}

/// The plain XYZ coordinate format: atom count, title line, then one
/// `element x y z` record per atom. Only the first frame is read.
pub struct XyzFile;

impl MolecularFile for XyzFile {
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Molecule, Self::Error> {
        let mut lines = reader.lines().enumerate();

        let count = loop {
            match lines.next() {
                Some((index, line)) => {
                    let line = line?;
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    break trimmed.parse::<usize>().map_err(|_| XyzError::Parse {
                        line: index + 1,
                        kind: XyzParseErrorKind::InvalidCount(trimmed.to_string()),
                    })?;
                }
                None => {
                    return Err(XyzError::Parse {
                        line: 1,
                        kind: XyzParseErrorKind::Empty,
                    });
                }
            }
        };

        let title = match lines.next() {
            Some((_, line)) => line?.trim().to_string(),
            None => String::new(),
        };

        let mut atoms = Vec::with_capacity(count);
        for (index, line) in lines.take(count) {
            let line = line?;
            atoms.push(parse_atom(&line, index + 1)?);
        }

        if atoms.len() != count {
            return Err(XyzError::Truncated {
                expected: count,
                found: atoms.len(),
            });
        }

        Ok(Molecule::new(title, atoms))
    }
}

fn parse_atom(line: &str, line_num: usize) -> Result<Atom, XyzError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(XyzError::Parse {
            line: line_num,
            kind: XyzParseErrorKind::ShortRecord,
        });
    }

    let mut coords = [0.0; 3];
    for (slot, field) in coords.iter_mut().zip(&fields[1..4]) {
        *slot = field.parse().map_err(|_| XyzError::Parse {
            line: line_num,
            kind: XyzParseErrorKind::InvalidFloat(field.to_string()),
        })?;
    }

    Ok(Atom::new(
        fields[0],
        Point3::new(coords[0], coords[1], coords[2]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const METHANOL: &str = "6
methanol
C          -0.04692        0.66370        0.00000
O          -0.04692       -0.75630        0.00000
H           1.00308        0.99703        0.00000
H          -0.55356        1.02377        0.87365
H          -0.55356        1.02377       -0.87365
H           0.84808       -1.09009        0.00000
";

    #[test]
    fn read_from_parses_count_title_and_atoms() {
        let molecule = XyzFile::read_from(&mut METHANOL.as_bytes()).unwrap();

        assert_eq!(molecule.title, "methanol");
        assert_eq!(molecule.len(), 6);
        assert_eq!(molecule.atom_type(1).unwrap(), "O");
        assert!((molecule.distance(0, 1).unwrap() - 1.42).abs() < 1e-6);
    }

    #[test]
    fn read_from_ignores_following_frames() {
        let two_frames = format!("{METHANOL}{METHANOL}");
        let molecule = XyzFile::read_from(&mut two_frames.as_bytes()).unwrap();
        assert_eq!(molecule.len(), 6);
    }

    #[test]
    fn read_from_reports_truncated_input() {
        let input = "3\ntitle\nC 0 0 0\nO 1 0 0\n";
        let result = XyzFile::read_from(&mut input.as_bytes());
        assert!(matches!(
            result,
            Err(XyzError::Truncated {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn read_from_reports_bad_coordinate_with_line_number() {
        let input = "1\ntitle\nC 0.0 abc 0.0\n";
        let result = XyzFile::read_from(&mut input.as_bytes());
        assert!(matches!(
            result,
            Err(XyzError::Parse {
                line: 3,
                kind: XyzParseErrorKind::InvalidFloat(_)
            })
        ));
    }

    #[test]
    fn read_from_rejects_empty_and_non_numeric_header() {
        assert!(matches!(
            XyzFile::read_from(&mut "".as_bytes()),
            Err(XyzError::Parse {
                kind: XyzParseErrorKind::Empty,
                ..
            })
        ));
        assert!(matches!(
            XyzFile::read_from(&mut "six\n".as_bytes()),
            Err(XyzError::Parse {
                kind: XyzParseErrorKind::InvalidCount(_),
                ..
            })
        ));
    }

    #[test]
    fn read_from_leaves_atoms_untyped() {
        let molecule = XyzFile::read_from(&mut METHANOL.as_bytes()).unwrap();
        assert!(molecule.atoms().iter().all(|atom| atom.atom_type.is_none()));
    }
}
