//! Core utilities and types for the clitree schema compiler.
//!
//! This crate provides the artifact types shared by the generators and
//! the identifier helpers used when schema names become source identifiers.

mod file;
mod utils;

// File operations
pub use file::{Artifact, GeneratedFile};
// String utilities
pub use utils::{to_identifier, to_snake_case};
