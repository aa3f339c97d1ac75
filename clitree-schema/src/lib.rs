//! Schema model, loading and validation for clitree.
//!
//! A schema document is an ordered array of groups and commands. Documents
//! are read from JSON or YAML, checked by the [`validate`] pass and then
//! converted into the typed [`Schema`] model.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod node;
mod parse;
mod validate;

pub use error::{Error, Format, Result, SourceContext};
pub use node::{
    Attributes, Command, Group, NONE_SENTINEL, Node, NodeKind, Param, ParamKind, Schema,
};
pub use validate::validate;
