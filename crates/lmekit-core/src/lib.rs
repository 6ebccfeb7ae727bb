//! # lmekit Core Library
//!
//! Glue logic for a molecular-modeling workflow: resolving symbolic atom and group
//! names to atom indices, turning named constraints into index-based constraint sets,
//! and producing the small text artifacts (charge lists, substituted input files,
//! neighbor-list control blocks) consumed by downstream programs.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers:
//!
//! - **[`core`]: The Foundation.** Mapping records and the name resolver, the minimal
//!   `Molecule` value, coordinate geometry and the file formats read back from
//!   an external chemistry toolkit.
//!
//! - **[`toolkit`]: The Collaborators.** Traits for the external capabilities (reading
//!   molecules, constrained force-field minimization, partial charges) and a backend
//!   that drives Open Babel through its command-line program and Python bindings.
//!   Everything above this layer is testable without the native toolkit installed.
//!
//! - **[`workflows`]: The Public API.** One module per tool, each with a validated
//!   configuration struct and a `run` entry point generic over the toolkit traits.

pub mod core;
pub mod toolkit;
pub mod workflows;
