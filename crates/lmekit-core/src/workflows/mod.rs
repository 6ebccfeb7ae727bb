//! # Workflows
//!
//! One module per command-line tool. Each exposes a named configuration struct
//! that is validated before any file is touched, and a `run` function that
//! loads its inputs once, resolves names through the mapping record, calls the
//! toolkit, and writes its output only after everything else succeeded.

pub mod charges;
pub mod check_distance;
pub mod error;
pub(crate) mod files;
pub mod minimize;
pub mod neighbors;
pub mod resolve;
pub mod substitute;

#[cfg(test)]
pub(crate) mod testing;

pub use error::WorkflowError;
