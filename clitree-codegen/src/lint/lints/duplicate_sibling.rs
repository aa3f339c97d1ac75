//! Lint for sibling nodes sharing a name.

use std::collections::HashMap;

use clitree_schema::{Group, Schema};

use super::super::{Lint, join};
use crate::lint::Diagnostic;

/// Lint that warns when two siblings share a name.
///
/// Siblings are the top-level nodes, or the commands and groups of one
/// group taken together.
pub struct DuplicateSiblingLint;

impl Lint for DuplicateSiblingLint {
    fn name(&self) -> &'static str {
        "duplicate-sibling"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        let names = schema.nodes.iter().map(|node| node.name());
        check_siblings(self.name(), "", names, diagnostics);

        for node in &schema.nodes {
            if let clitree_schema::Node::Group(group) = node {
                check_group(self.name(), group, "", diagnostics);
            }
        }
    }
}

fn check_group(lint: &str, group: &Group, prefix: &str, diagnostics: &mut Vec<Diagnostic>) {
    let path = join(prefix, &group.name);
    let names = group
        .commands
        .iter()
        .map(|c| c.name.as_str())
        .chain(group.groups.iter().map(|g| g.name.as_str()));
    check_siblings(lint, &path, names, diagnostics);

    for child in &group.groups {
        check_group(lint, child, &path, diagnostics);
    }
}

fn check_siblings<'a>(
    lint: &str,
    parent: &str,
    names: impl Iterator<Item = &'a str>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for name in names {
        let count = seen.entry(name).or_default();
        *count += 1;
        // Report each duplicated name once
        if *count == 2 {
            let scope = if parent.is_empty() {
                "at the top level".to_string()
            } else {
                format!("under '{}'", parent)
            };
            diagnostics.push(
                Diagnostic::warning(lint, format!("duplicate name '{}' {}", name, scope))
                    .at(join(parent, name)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use clitree_schema::Command;

    use super::*;

    #[test]
    fn test_no_duplicates() {
        let schema = Schema::new(vec![
            Group::new("db", "")
                .with_command(Command::new("migrate", ""))
                .into(),
            Group::new("api", "")
                .with_command(Command::new("migrate", ""))
                .into(),
        ]);

        let mut diagnostics = Vec::new();
        DuplicateSiblingLint.check(&schema, &mut diagnostics);

        // db/migrate and api/migrate have different parents
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_command_and_group_share_name() {
        let schema = Schema::new(vec![
            Group::new("test", "")
                .with_command(Command::new("counting", ""))
                .with_group(Group::new("counting", ""))
                .into(),
        ]);

        let mut diagnostics = Vec::new();
        DuplicateSiblingLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "duplicate name 'counting' under 'test'");
        assert_eq!(diagnostics[0].location.as_deref(), Some("test/counting"));
    }

    #[test]
    fn test_top_level_duplicates_reported_once() {
        let schema = Schema::new(vec![
            Command::new("a", "").into(),
            Command::new("a", "").into(),
            Command::new("a", "").into(),
        ]);

        let mut diagnostics = Vec::new();
        DuplicateSiblingLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.ends_with("at the top level"));
    }
}
