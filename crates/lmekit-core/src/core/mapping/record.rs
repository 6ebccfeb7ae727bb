use super::resolver::NameResolver;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const SIDECAR_EXTENSION: &str = "map.json";

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Failed to read mapping file '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed mapping file '{path}': {source}", path = path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The side-car record that names atoms and groups of one molecule.
///
/// The `indexes` and `len` fields are only present in records exported for the
/// charge path, where queries may refer to atoms by their source index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// Atom name to zero-based atom index.
    #[serde(default)]
    pub ids: BTreeMap<String, usize>,
    /// Group name to an ordered list of zero-based atom indices.
    #[serde(default)]
    pub groups: BTreeMap<String, Vec<usize>>,
    /// Source index to internal sequential index.
    #[serde(default)]
    pub indexes: BTreeMap<usize, usize>,
    /// Declared atom count.
    #[serde(default)]
    pub len: Option<usize>,
}

impl MappingRecord {
    pub fn new(ids: BTreeMap<String, usize>, groups: BTreeMap<String, Vec<usize>>) -> Self {
        Self {
            ids,
            groups,
            ..Self::default()
        }
    }

    /// Parses a record from any JSON source.
    pub fn from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Loads a record from disk and warns once about names defined in both tables.
    pub fn load(path: &Path) -> Result<Self, MappingError> {
        debug!("Loading mapping record from {:?}", path);
        let file = File::open(path).map_err(|source| MappingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let record =
            Self::from_reader(BufReader::new(file)).map_err(|source| MappingError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let collisions = record.collisions();
        if !collisions.is_empty() {
            warn!(
                "Mapping {:?} defines {} name(s) as both an atom id and a group: {}. \
                 Resolving any of them will fail.",
                path,
                collisions.len(),
                collisions.join(", ")
            );
        }

        debug!(
            "Mapping record loaded: {} id(s), {} group(s), {} index translation(s).",
            record.ids.len(),
            record.groups.len(),
            record.indexes.len()
        );
        Ok(record)
    }

    /// The conventional side-car location for a molecule file: its extension is
    /// replaced by `.map.json`.
    pub fn sidecar_path(molecule_path: &Path) -> PathBuf {
        molecule_path.with_extension(SIDECAR_EXTENSION)
    }

    pub fn resolver(&self) -> NameResolver<'_> {
        NameResolver::new(&self.ids, &self.groups, &self.indexes)
    }

    /// Translates a source index into the internal sequential index.
    pub fn translate(&self, source_index: usize) -> Option<usize> {
        self.indexes.get(&source_index).copied()
    }

    /// Names present in both the `ids` and `groups` tables, sorted.
    pub fn collisions(&self) -> Vec<&str> {
        self.ids
            .keys()
            .filter(|name| self.groups.contains_key(*name))
            .map(String::as_str)
            .collect()
    }
}
