//! Built-in lints for schema validation.

mod argument_dropped;
mod duplicate_sibling;
mod empty_help;

pub use argument_dropped::ArgumentDroppedLint;
pub use duplicate_sibling::DuplicateSiblingLint;
pub use empty_help::EmptyHelpLint;
