//! Lowering: turn a validated schema into flat, normalized declarations.
//!
//! All normalization happens here, so any [`ConfigurationError`] surfaces
//! before a single line of target text exists.

use std::collections::HashSet;

use clitree_core::to_identifier;
use clitree_schema::{Command, Group, Node, NodeKind, Param, Schema};
use indexmap::IndexMap;

use crate::{
    ConfigurationError, Literal, Result, ValueType,
    types::{normalize, normalize_all},
};

/// Node fields that are carried into a declaration
const NODE_FIELDS: &[&str] = &["name", "help", "hidden"];

/// What a declaration is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parent {
    /// The target's root object
    Root,
    /// The identifier of the enclosing group
    Node(String),
}

/// One emitted group or command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: NodeKind,
    pub parent: Parent,
    /// Identifier other declarations refer to this node by
    pub identifier: String,
    /// Normalized `name`, `help` and `hidden`
    pub attributes: IndexMap<String, Literal>,
    pub options: Vec<OptionDecl>,
}

/// One option of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDecl {
    /// Flag-literal name, e.g. `--user`
    pub flag: String,
    /// Identifier the option value is bound to
    pub argument: String,
    /// Remaining normalized attributes, in document order
    pub attributes: IndexMap<String, Literal>,
    pub value_type: Option<ValueType>,
}

/// Lower a schema into declarations in document order.
///
/// Each node is followed by its commands, then by its groups, and each
/// child is fully expanded before the next sibling. Identifiers are unique
/// across the whole output: a name already taken earlier in document order
/// gets a numeric suffix (`tool`, `tool_2`).
pub fn lower(schema: &Schema) -> Result<Vec<Declaration>> {
    let mut lowering = Lowering {
        out: Vec::with_capacity(schema.node_count()),
        taken: HashSet::new(),
    };
    for node in &schema.nodes {
        match node {
            Node::Group(group) => lowering.group(group, Parent::Root)?,
            Node::Command(command) => lowering.command(command, Parent::Root)?,
        }
    }
    Ok(lowering.out)
}

struct Lowering {
    out: Vec<Declaration>,
    taken: HashSet<String>,
}

impl Lowering {
    fn group(&mut self, group: &Group, parent: Parent) -> Result<()> {
        let declaration = self.declare(
            NodeKind::Group,
            parent,
            &group.name,
            &group.help,
            &group.hidden,
            &group.params,
        )?;
        let this = Parent::Node(declaration.identifier.clone());
        self.out.push(declaration);

        for command in &group.commands {
            self.command(command, this.clone())?;
        }
        for child in &group.groups {
            self.group(child, this.clone())?;
        }
        Ok(())
    }

    fn command(&mut self, command: &Command, parent: Parent) -> Result<()> {
        let declaration = self.declare(
            NodeKind::Command,
            parent,
            &command.name,
            &command.help,
            &command.hidden,
            &command.params,
        )?;
        self.out.push(declaration);
        Ok(())
    }

    fn declare(
        &mut self,
        kind: NodeKind,
        parent: Parent,
        name: &str,
        help: &str,
        hidden: &str,
        params: &[Param],
    ) -> Result<Declaration> {
        let mut attributes = IndexMap::with_capacity(NODE_FIELDS.len());
        for (key, raw) in NODE_FIELDS.iter().zip([name, help, hidden]) {
            attributes.insert(key.to_string(), normalize(key, raw)?);
        }

        // Arguments are not emitted
        let options = params
            .iter()
            .filter(|param| param.is_option())
            .map(|param| lower_option(param, name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Declaration {
            kind,
            parent,
            identifier: self.claim(node_identifier(name)),
            attributes,
            options,
        })
    }

    fn claim(&mut self, base: String) -> String {
        let mut identifier = base.clone();
        let mut n = 1;
        while self.taken.contains(&identifier) {
            n += 1;
            identifier = format!("{}_{}", base, n);
        }
        self.taken.insert(identifier.clone());
        identifier
    }
}

/// Identifier of a node, derived from its logical (unquoted) name
fn node_identifier(name: &str) -> String {
    match normalize("name", name) {
        Ok(Literal::Str(logical)) => to_identifier(&logical),
        _ => to_identifier(name),
    }
}

fn lower_option(param: &Param, node: &str) -> Result<OptionDecl> {
    let mut normalized = normalize_all(&param.attributes)?;

    let name = normalized
        .attributes
        .shift_remove("name")
        .ok_or_else(|| ConfigurationError::MissingOptionName {
            node: node.to_string(),
        })?;

    let logical = match &name {
        Literal::Str(s) if !s.is_empty() => s.as_str(),
        _ => {
            return Err(ConfigurationError::OptionNameTooShort {
                node: node.to_string(),
            });
        }
    };

    Ok(OptionDecl {
        flag: format!("--{}", logical),
        argument: to_identifier(logical),
        attributes: normalized.attributes,
        value_type: normalized.value_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_option(name: &str) -> Param {
        Param::option([
            ("name", name),
            ("help", "None"),
            ("type", "STRING"),
            ("default", "None"),
            ("required", "False"),
            ("prompt", "None"),
        ])
    }

    fn names(declarations: &[Declaration]) -> Vec<&str> {
        declarations
            .iter()
            .map(|d| d.identifier.as_str())
            .collect()
    }

    #[test]
    fn test_commands_precede_groups() {
        let schema = Schema::new(vec![
            Group::new("root", "")
                .with_command(Command::new("c1", ""))
                .with_command(Command::new("c2", ""))
                .with_group(Group::new("g1", "").with_command(Command::new("g1c", "")))
                .into(),
        ]);

        let declarations = lower(&schema).unwrap();
        assert_eq!(names(&declarations), ["root", "c1", "c2", "g1", "g1c"]);
        assert_eq!(declarations[0].parent, Parent::Root);
        assert_eq!(declarations[3].parent, Parent::Node("root".into()));
        assert_eq!(declarations[4].parent, Parent::Node("g1".into()));
    }

    #[test]
    fn test_child_subtree_precedes_next_sibling() {
        let schema = Schema::new(vec![
            Group::new("a", "")
                .with_group(Group::new("b", "").with_group(Group::new("c", "")))
                .with_group(Group::new("d", ""))
                .into(),
            Command::new("e", "").into(),
        ]);

        let declarations = lower(&schema).unwrap();
        assert_eq!(names(&declarations), ["a", "b", "c", "d", "e"]);
        assert_eq!(declarations[4].parent, Parent::Root);
        assert_eq!(declarations[4].kind, NodeKind::Command);
    }

    #[test]
    fn test_option_flag_is_first_and_prefixed() {
        let schema = Schema::new(vec![
            Command::new("greet", "Greets")
                .with_param(string_option("\"user\""))
                .into(),
        ]);

        let declarations = lower(&schema).unwrap();
        let option = &declarations[0].options[0];
        assert_eq!(option.flag, "--user");
        assert_eq!(option.argument, "user");
        assert_eq!(option.value_type, Some(ValueType::Str));

        let keys: Vec<&str> = option.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["help", "default", "required", "prompt"]);
        assert_eq!(option.attributes["default"], Literal::None);
    }

    #[test]
    fn test_arguments_are_skipped() {
        let schema = Schema::new(vec![
            Command::new("copy", "")
                .with_param(Param::argument([
                    ("name", "src"),
                    ("type", "STRING"),
                    ("default", "None"),
                    ("required", "True"),
                ]))
                .with_param(string_option("dest"))
                .into(),
        ]);

        let declarations = lower(&schema).unwrap();
        assert_eq!(declarations[0].options.len(), 1);
        assert_eq!(declarations[0].options[0].flag, "--dest");
    }

    #[test]
    fn test_empty_option_name_is_rejected() {
        let schema = Schema::new(vec![
            Command::new("greet", "").with_param(string_option("\"\"")).into(),
        ]);
        assert_eq!(
            lower(&schema),
            Err(ConfigurationError::OptionNameTooShort {
                node: "greet".into()
            })
        );
    }

    #[test]
    fn test_invalid_hidden_fails_lowering() {
        let mut command = Command::new("x", "");
        command.hidden = "maybe".into();
        let schema = Schema::new(vec![command.into()]);

        assert!(matches!(
            lower(&schema),
            Err(ConfigurationError::InvalidBoolean { .. })
        ));
    }

    #[test]
    fn test_identifiers_are_unique_across_the_tree() {
        let schema = Schema::new(vec![
            Group::new("tool", "")
                .with_command(Command::new("tool", ""))
                .with_group(Group::new("remote", "").with_command(Command::new("tool", "")))
                .into(),
            Command::new("remote", "").into(),
        ]);

        let declarations = lower(&schema).unwrap();
        assert_eq!(
            names(&declarations),
            ["tool", "tool_2", "remote", "tool_3", "remote_2"]
        );
        assert_eq!(declarations[2].parent, Parent::Node("tool".into()));
        assert_eq!(declarations[3].parent, Parent::Node("remote".into()));
        assert_eq!(declarations[1].attributes["name"], Literal::Str("tool".into()));
    }

    #[test]
    fn test_reserved_node_names_are_suffixed() {
        let schema = Schema::new(vec![
            Group::new("class", "").with_command(Command::new("ctx", "")).into(),
        ]);

        let declarations = lower(&schema).unwrap();
        assert_eq!(names(&declarations), ["class_", "ctx_"]);
        assert_eq!(declarations[1].parent, Parent::Node("class_".into()));
    }

    #[test]
    fn test_identifiers_are_snake_cased() {
        let schema = Schema::new(vec![
            Group::new("data-center", "")
                .with_command(Command::new("list-all", ""))
                .into(),
        ]);

        let declarations = lower(&schema).unwrap();
        assert_eq!(names(&declarations), ["data_center", "list_all"]);
        assert_eq!(declarations[1].parent, Parent::Node("data_center".into()));
        assert_eq!(
            declarations[1].attributes["name"],
            Literal::Str("list-all".into())
        );
    }
}
