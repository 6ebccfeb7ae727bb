use crate::core::io::traits::MolecularFile;
use crate::core::models::molecule::{Atom, Molecule};
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

const MOLECULE_SECTION: &str = "@<TRIPOS>MOLECULE";
const ATOM_SECTION: &str = "@<TRIPOS>ATOM";
const SECTION_PREFIX: &str = "@<TRIPOS>";
const TYPE_COLUMN: usize = 5;
const CHARGE_COLUMN: usize = 8;

#[derive(Debug, Error)]
pub enum Mol2Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("No @<TRIPOS>ATOM section found")]
    MissingAtomSection,
    #[error("Atom record on line {line} needs an id, a name, three coordinates and a type")]
    ShortRecord { line: usize },
    #[error("Invalid coordinate '{value}' on line {line}")]
    InvalidCoordinate { line: usize, value: String },
    #[error("Atom record on line {line} has no charge column")]
    MissingCharge { line: usize },
    #[error("Invalid charge '{value}' on line {line}")]
    InvalidCharge { line: usize, value: String },
}

/// The title and the atom records of the first molecule, with 1-based line numbers.
struct Records {
    title: String,
    atoms: Vec<(usize, String)>,
}

fn read_records(reader: &mut impl BufRead) -> Result<Records, Mol2Error> {
    let mut title = None;
    let mut in_molecule = false;
    let mut in_atoms = false;
    let mut seen_atoms = false;
    let mut atoms = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.starts_with(SECTION_PREFIX) {
            if in_atoms {
                break;
            }
            in_molecule = trimmed == MOLECULE_SECTION && title.is_none();
            in_atoms = trimmed == ATOM_SECTION;
            seen_atoms |= in_atoms;
            continue;
        }
        if in_molecule {
            title = Some(trimmed.to_string());
            in_molecule = false;
            continue;
        }
        if in_atoms && !trimmed.is_empty() {
            atoms.push((line_num + 1, trimmed.to_string()));
        }
    }

    if !seen_atoms {
        return Err(Mol2Error::MissingAtomSection);
    }
    Ok(Records {
        title: title.unwrap_or_default(),
        atoms,
    })
}

/// Reads the partial-charge column of the first `@<TRIPOS>ATOM` section.
///
/// Charges are returned in atom-record order, which is the toolkit's atom order.
pub fn read_partial_charges(reader: &mut impl BufRead) -> Result<Vec<f64>, Mol2Error> {
    read_records(reader)?
        .atoms
        .iter()
        .map(|(line, record)| {
            let value = record
                .split_whitespace()
                .nth(CHARGE_COLUMN)
                .ok_or(Mol2Error::MissingCharge { line: *line })?;
            value.parse().map_err(|_| Mol2Error::InvalidCharge {
                line: *line,
                value: value.to_string(),
            })
        })
        .collect()
}

/// The TRIPOS mol2 format, read as typed atoms with coordinates.
///
/// The element is the part of the SYBYL type before the first dot, so `C.ar`
/// yields a carbon typed `C.ar`.
pub struct Mol2File;

impl MolecularFile for Mol2File {
    type Error = Mol2Error;

    fn read_from(reader: &mut impl BufRead) -> Result<Molecule, Self::Error> {
        let records = read_records(reader)?;
        let atoms = records
            .atoms
            .iter()
            .map(|(line, record)| parse_atom(record, *line))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Molecule::new(records.title, atoms))
    }
}

fn parse_atom(record: &str, line: usize) -> Result<Atom, Mol2Error> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    if fields.len() <= TYPE_COLUMN {
        return Err(Mol2Error::ShortRecord { line });
    }

    let mut coords = [0.0; 3];
    for (slot, field) in coords.iter_mut().zip(&fields[2..5]) {
        *slot = field.parse().map_err(|_| Mol2Error::InvalidCoordinate {
            line,
            value: field.to_string(),
        })?;
    }

    let atom_type = fields[TYPE_COLUMN];
    let element = atom_type.split('.').next().unwrap_or(atom_type);
    Ok(Atom::new(element, Point3::new(coords[0], coords[1], coords[2])).with_type(atom_type))
}
