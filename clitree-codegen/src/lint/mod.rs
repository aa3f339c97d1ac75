//! Non-fatal schema lints.
//!
//! Lints never block compilation; they report intent violations such as
//! duplicate sibling names that the grammar itself does not forbid.

mod diagnostic;
mod lints;

use clitree_schema::{Node, NodeKind, Param, Schema};
pub use diagnostic::{Diagnostic, Severity};
pub use lints::{ArgumentDroppedLint, DuplicateSiblingLint, EmptyHelpLint};

/// A lint that checks the schema for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the schema and add any diagnostics.
    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>);
}

/// The built-in lints, in the order they run.
pub fn default_lints() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(DuplicateSiblingLint),
        Box::new(EmptyHelpLint),
        Box::new(ArgumentDroppedLint),
    ]
}

/// Run all built-in lints against a schema.
pub fn lint(schema: &Schema) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in default_lints() {
        tracing::debug!(lint = lint.name(), "running lint");
        lint.check(schema, &mut diagnostics);
    }
    diagnostics
}

/// A node as seen while walking the tree.
pub(crate) struct Visit<'a> {
    pub kind: NodeKind,
    /// Slash-separated names from the top level down to this node
    pub path: String,
    pub help: &'a str,
    pub params: &'a [Param],
}

/// Call `f` for every node in document order.
pub(crate) fn walk<'a>(schema: &'a Schema, f: &mut dyn FnMut(&Visit<'a>)) {
    for node in &schema.nodes {
        match node {
            Node::Group(group) => walk_group(group, "", f),
            Node::Command(command) => f(&Visit {
                kind: NodeKind::Command,
                path: command.name.clone(),
                help: &command.help,
                params: &command.params,
            }),
        }
    }
}

fn walk_group<'a>(group: &'a clitree_schema::Group, prefix: &str, f: &mut dyn FnMut(&Visit<'a>)) {
    let path = join(prefix, &group.name);
    f(&Visit {
        kind: NodeKind::Group,
        path: path.clone(),
        help: &group.help,
        params: &group.params,
    });

    for command in &group.commands {
        f(&Visit {
            kind: NodeKind::Command,
            path: join(&path, &command.name),
            help: &command.help,
            params: &command.params,
        });
    }
    for child in &group.groups {
        walk_group(child, &path, f);
    }
}

pub(crate) fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}
