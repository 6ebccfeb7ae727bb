//! Symbolic atom naming for a single molecule.
//!
//! A [`MappingRecord`] is produced upstream next to each molecule file and associates
//! atom names and group names with zero-based atom indices. The [`NameResolver`]
//! is the one place where a textual reference is turned into indices; every
//! workflow goes through it.

pub mod record;
pub mod resolver;

pub use record::{MappingError, MappingRecord};
pub use resolver::{NameResolver, Query, ResolveError, render_indices, shift_indices};
