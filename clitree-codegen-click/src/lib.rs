//! Click (Python) target for clitree.
//!
//! [`ClickTarget`] renders compiled declarations as `click` decorators and
//! [`ProjectGenerator`] lays out a project directory holding the generated
//! `<name>cli.py` plus the `schema.json` and `schema.yaml` descriptors.

mod files;
mod project;
mod target;

pub use files::{CliPy, SchemaJson, SchemaYaml};
pub use project::{
    AlwaysReplace, GeneratedProject, NeverReplace, ProjectError, ProjectGenerator, PromptError,
    ReplacePrompt,
};
pub use target::ClickTarget;
