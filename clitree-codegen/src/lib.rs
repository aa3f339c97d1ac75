//! Schema compiler for clitree.
//!
//! Compilation runs in two stages. [`lower`] normalizes every attribute
//! through the Type Descriptor ([`normalize`], [`normalize_all`]) and
//! flattens the tree into [`Declaration`]s in document order. A [`Target`]
//! then renders those declarations as source text.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building ([`SourceBuilder`](builder::SourceBuilder))
//! - [`lint`] - Non-fatal schema diagnostics

pub mod builder;
mod compile;
mod display;
mod error;
pub mod lint;
mod lower;
mod target;
mod types;

#[cfg(test)]
mod testing;

pub use compile::{compile, compile_source, resolve_entry_point};
pub use display::{DisplayStyle, SchemaTreeDisplay};
pub use error::{ConfigurationError, Result};
pub use lower::{Declaration, OptionDecl, Parent, lower};
pub use target::Target;
pub use types::{Literal, Normalized, ValueType, normalize, normalize_all};
