use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No name '{name}' found in either the groups or the ids table")]
    NameNotFound { name: String },

    #[error("The following names or indexes were not found in the mapping: {}", .names.join(", "))]
    NamesNotFound { names: Vec<String> },

    #[error("Name '{name}' is defined in both the groups and the ids table")]
    AmbiguousName { name: String },

    #[error("Reference '{name}' must resolve to exactly one atom, but resolved to {count}")]
    NotSingleAtom { name: String, count: usize },
}

/// A reference to one or more atoms as written in a JSON input file.
///
/// Integers and strings may be mixed freely in the same list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query {
    Index(usize),
    Name(String),
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Index(index) => write!(f, "{}", index),
            Query::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Query {
    fn from(name: &str) -> Self {
        Query::Name(name.to_string())
    }
}

impl From<usize> for Query {
    fn from(index: usize) -> Self {
        Query::Index(index)
    }
}

/// Resolves a textual reference against the two lookup tables.
///
/// An integer literal is an already-resolved index and is never looked up, so a
/// table key that looks like a number can not shadow it. A name defined in both
/// tables is rejected instead of silently preferring one table.
pub fn resolve_name(
    name: &str,
    ids: &BTreeMap<String, usize>,
    groups: &BTreeMap<String, Vec<usize>>,
) -> Result<Vec<usize>, ResolveError> {
    if let Ok(index) = name.parse::<usize>() {
        return Ok(vec![index]);
    }

    match (groups.get(name), ids.get(name)) {
        (Some(_), Some(_)) => Err(ResolveError::AmbiguousName {
            name: name.to_string(),
        }),
        (Some(group), None) => Ok(group.clone()),
        (None, Some(&index)) => Ok(vec![index]),
        (None, None) => Err(ResolveError::NameNotFound {
            name: name.to_string(),
        }),
    }
}

/// Joins atom indices with `separator`, shifting them to 1-based numbering when
/// `one_based` is set.
pub fn render_indices(indices: &[usize], separator: &str, one_based: bool) -> String {
    shift_indices(indices, one_based)
        .iter()
        .map(u128::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Shifts indices for display. The widened type keeps `usize::MAX` literals exact.
pub fn shift_indices(indices: &[usize], one_based: bool) -> Vec<u128> {
    let offset = u128::from(one_based);
    indices
        .iter()
        .map(|&index| index as u128 + offset)
        .collect()
}

/// A borrowed view over the tables of a [`MappingRecord`](super::MappingRecord).
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    ids: &'a BTreeMap<String, usize>,
    groups: &'a BTreeMap<String, Vec<usize>>,
    indexes: &'a BTreeMap<usize, usize>,
}

impl<'a> NameResolver<'a> {
    pub fn new(
        ids: &'a BTreeMap<String, usize>,
        groups: &'a BTreeMap<String, Vec<usize>>,
        indexes: &'a BTreeMap<usize, usize>,
    ) -> Self {
        Self {
            ids,
            groups,
            indexes,
        }
    }

    pub fn resolve(&self, name: &str) -> Result<Vec<usize>, ResolveError> {
        resolve_name(name, self.ids, self.groups)
    }

    /// Resolves a reference that has to denote exactly one atom.
    pub fn resolve_atom(&self, name: &str) -> Result<usize, ResolveError> {
        single(name, self.resolve(name)?)
    }

    /// Resolves a JSON reference where integers are already atom indices.
    pub fn resolve_reference(&self, query: &Query) -> Result<Vec<usize>, ResolveError> {
        match query {
            Query::Index(index) => Ok(vec![*index]),
            Query::Name(name) => self.resolve(name),
        }
    }

    pub fn resolve_reference_atom(&self, query: &Query) -> Result<usize, ResolveError> {
        match query {
            Query::Index(index) => Ok(*index),
            Query::Name(name) => self.resolve_atom(name),
        }
    }

    /// Resolves a batch of queries, reporting every unresolved entry at once.
    ///
    /// Integer queries are source indices and go through the `indexes`
    /// translation table. The result holds one index list per query, in query
    /// order.
    pub fn resolve_each(&self, queries: &[Query]) -> Result<Vec<Vec<usize>>, ResolveError> {
        let mut resolved = Vec::with_capacity(queries.len());
        let mut missing = Vec::new();

        for query in queries {
            let result = match query {
                Query::Index(source) => self.indexes.get(source).map(|&index| vec![index]),
                Query::Name(name) => self.resolve(name).ok(),
            };
            match result {
                Some(indices) => resolved.push(indices),
                None => missing.push(query.to_string()),
            }
        }

        if missing.is_empty() {
            Ok(resolved)
        } else {
            Err(ResolveError::NamesNotFound { names: missing })
        }
    }

    /// Like [`resolve_each`](Self::resolve_each), with the lists concatenated.
    pub fn resolve_all(&self, queries: &[Query]) -> Result<Vec<usize>, ResolveError> {
        Ok(self.resolve_each(queries)?.concat())
    }
}

fn single(name: &str, indices: Vec<usize>) -> Result<usize, ResolveError> {
    match indices.as_slice() {
        [index] => Ok(*index),
        _ => Err(ResolveError::NotSingleAtom {
            name: name.to_string(),
            count: indices.len(),
        }),
    }
}
