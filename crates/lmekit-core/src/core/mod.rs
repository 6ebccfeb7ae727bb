//! # Core Module
//!
//! Stateless building blocks shared by every workflow.
//!
//! - [`mapping`]: the side-car mapping record and the name resolver that turns
//!   symbolic references into zero-based atom indices.
//! - [`models`]: the `Molecule` value exchanged with the external toolkit.
//! - [`io`]: coordinate interchange (XYZ), the mol2 charge column reader and
//!   file-format inference.
//! - [`utils`]: coordinate geometry.

pub mod io;
pub mod mapping;
pub mod models;
pub mod utils;
