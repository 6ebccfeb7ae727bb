use super::error::WorkflowError;
use super::files::{read_json, write_text};
use serde::Deserialize;
use serde::de::IgnoredAny;
use std::fmt::Write;
use std::path::PathBuf;
use tracing::info;

/// The part of an exported structure needed for a neighbor list: the atom count
/// and the bond list. Atom records and bond orders are not inspected.
#[derive(Debug, Deserialize)]
pub struct BondGraph {
    pub atoms: Vec<IgnoredAny>,
    pub bonds: Vec<(usize, usize, IgnoredAny)>,
}

impl BondGraph {
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_pairs(&self) -> Vec<(usize, usize)> {
        self.bonds.iter().map(|&(a, b, _)| (a, b)).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NeighborsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Builds the neighbor list of every atom, zero-based. Neighbors appear in
/// bond-list order.
pub fn neighbor_lists(
    atom_count: usize,
    bonds: &[(usize, usize)],
) -> Result<Vec<Vec<usize>>, WorkflowError> {
    let mut lists = vec![Vec::new(); atom_count];

    for (bond, &(a, b)) in bonds.iter().enumerate() {
        for atom in [a, b] {
            if atom >= atom_count {
                return Err(WorkflowError::BondOutOfRange {
                    bond,
                    atom,
                    len: atom_count,
                });
            }
        }
        lists[a].push(b);
        if a != b {
            lists[b].push(a);
        }
    }

    Ok(lists)
}

/// Renders an xtb `$ffnb` block with 1-based atom numbers.
pub fn render_ffnb(lists: &[Vec<usize>]) -> String {
    let mut block = String::from("$ffnb\n");
    for (atom, neighbors) in lists.iter().enumerate() {
        let joined = neighbors
            .iter()
            .map(|neighbor| (neighbor + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(block, "  nb = {}: {}", atom + 1, joined);
    }
    block.push_str("$end\n");
    block
}

pub fn run(config: &NeighborsConfig) -> Result<usize, WorkflowError> {
    let graph: BondGraph = read_json(&config.input)?;
    let lists = neighbor_lists(graph.atom_count(), &graph.bond_pairs())?;
    write_text(&config.output, &render_ffnb(&lists))?;
    info!(
        "Wrote neighbor list for {} atom(s) and {} bond(s) to {:?}",
        lists.len(),
        graph.bonds.len(),
        config.output
    );
    Ok(lists.len())
}
