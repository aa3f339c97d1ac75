use clitree_schema::{Command, Group, NONE_SENTINEL, Node, Param, Schema};

use crate::{LiveCommand, LiveParam};

/// Permission written for nodes that do not carry one
pub const DEFAULT_PERMISSION: &str = "developer";

/// Converts a live command tree back into schema form.
#[derive(Debug, Clone)]
pub struct Reflector {
    default_permission: String,
}

impl Default for Reflector {
    fn default() -> Self {
        Self::new()
    }
}

impl Reflector {
    pub fn new() -> Self {
        Self {
            default_permission: DEFAULT_PERMISSION.to_string(),
        }
    }

    /// Use `permission` for nodes without one of their own
    pub fn with_default_permission(mut self, permission: impl Into<String>) -> Self {
        self.default_permission = permission.into();
        self
    }

    /// Reflect a live root into a one-node schema document.
    pub fn reflect_schema<C: LiveCommand>(&self, root: &C) -> Schema {
        self.reflect_all(std::slice::from_ref(root))
    }

    /// Reflect several live roots into one document, in order.
    pub fn reflect_all<C: LiveCommand>(&self, roots: &[C]) -> Schema {
        Schema::new(roots.iter().map(|root| self.reflect(root)).collect())
    }

    /// Reflect a live node. A leaf root becomes a command record.
    pub fn reflect<C: LiveCommand>(&self, node: &C) -> Node {
        if node.is_group() {
            Node::Group(self.reflect_group(node))
        } else {
            Node::Command(self.reflect_command(node))
        }
    }

    fn reflect_group<C: LiveCommand>(&self, node: &C) -> Group {
        let mut group = Group::new(node.name(), stringify(node.help()));
        group.permission = Some(self.permission(node));
        group.hidden = boolean(node.is_hidden()).to_string();
        group.params = node.params().iter().map(reflect_param).collect();

        for child in node.children() {
            if child.is_group() {
                group.groups.push(self.reflect_group(child));
            } else {
                group.commands.push(self.reflect_command(child));
            }
        }
        group
    }

    fn reflect_command<C: LiveCommand>(&self, node: &C) -> Command {
        let mut command = Command::new(node.name(), stringify(node.help()));
        command.permission = Some(self.permission(node));
        command.hidden = boolean(node.is_hidden()).to_string();
        command.params = node.params().iter().map(reflect_param).collect();
        command
    }

    fn permission<C: LiveCommand>(&self, node: &C) -> String {
        node.permission()
            .unwrap_or_else(|| self.default_permission.clone())
    }
}

fn reflect_param(param: &LiveParam) -> Param {
    match param {
        LiveParam::Option {
            name,
            help,
            value_type,
            default,
            required,
            prompt,
        } => Param::option([
            ("name", name.clone()),
            ("help", stringify(help.clone())),
            ("type", stringify(value_type.clone())),
            ("default", stringify(default.clone())),
            ("required", boolean(*required).to_string()),
            ("prompt", stringify(prompt.clone())),
        ]),
        LiveParam::Argument {
            name,
            value_type,
            default,
            required,
        } => Param::argument([
            ("name", name.clone()),
            ("type", stringify(value_type.clone())),
            ("default", stringify(default.clone())),
            ("required", boolean(*required).to_string()),
        ]),
    }
}

/// Absent values are written as the `None` sentinel
fn stringify(value: Option<String>) -> String {
    value.unwrap_or_else(|| NONE_SENTINEL.to_string())
}

fn boolean(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

#[cfg(test)]
mod tests {
    use clitree_schema::ParamKind;

    use super::*;

    /// In-memory command tree
    #[derive(Default)]
    struct Mock {
        name: &'static str,
        help: Option<&'static str>,
        hidden: bool,
        permission: Option<&'static str>,
        group: bool,
        children: Vec<Mock>,
        params: Vec<LiveParam>,
    }

    impl LiveCommand for Mock {
        fn name(&self) -> &str {
            self.name
        }

        fn help(&self) -> Option<String> {
            self.help.map(str::to_string)
        }

        fn is_hidden(&self) -> bool {
            self.hidden
        }

        fn permission(&self) -> Option<String> {
            self.permission.map(str::to_string)
        }

        fn is_group(&self) -> bool {
            self.group
        }

        fn children(&self) -> Vec<&Self> {
            self.children.iter().collect()
        }

        fn params(&self) -> Vec<LiveParam> {
            self.params.clone()
        }
    }

    fn tree() -> Mock {
        Mock {
            name: "test",
            help: Some("Test"),
            group: true,
            params: vec![LiveParam::Option {
                name: "cp".into(),
                help: None,
                value_type: Some("STRING".into()),
                default: Some("".into()),
                required: false,
                prompt: None,
            }],
            children: vec![
                Mock {
                    name: "counting",
                    group: true,
                    hidden: true,
                    children: vec![Mock {
                        name: "log",
                        ..Default::default()
                    }],
                    ..Default::default()
                },
                Mock {
                    name: "print",
                    permission: Some("admin"),
                    params: vec![LiveParam::Argument {
                        name: "path".into(),
                        value_type: Some("STRING".into()),
                        default: None,
                        required: true,
                    }],
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_group_children_are_split_by_kind() {
        let Node::Group(test) = Reflector::new().reflect(&tree()) else {
            panic!("expected a group");
        };

        assert_eq!(test.help, "Test");
        assert_eq!(test.groups.len(), 1);
        assert_eq!(test.groups[0].name, "counting");
        assert_eq!(test.groups[0].hidden, "True");
        assert_eq!(test.groups[0].commands[0].name, "log");
        assert_eq!(test.commands.len(), 1);
        assert_eq!(test.commands[0].name, "print");
    }

    #[test]
    fn test_permission_defaults_and_overrides() {
        let Node::Group(test) = Reflector::new().reflect(&tree()) else {
            panic!("expected a group");
        };
        assert_eq!(test.permission.as_deref(), Some("developer"));
        assert_eq!(test.commands[0].permission.as_deref(), Some("admin"));

        let Node::Group(test) = Reflector::new()
            .with_default_permission("user")
            .reflect(&tree())
        else {
            panic!("expected a group");
        };
        assert_eq!(test.groups[0].permission.as_deref(), Some("user"));
    }

    #[test]
    fn test_params_are_stringified() {
        let Node::Group(test) = Reflector::new().reflect(&tree()) else {
            panic!("expected a group");
        };

        let cp = &test.params[0];
        assert_eq!(cp.param_type, ParamKind::Option);
        let pairs: Vec<(&str, &str)> = cp
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("name", "cp"),
                ("help", "None"),
                ("type", "STRING"),
                ("default", ""),
                ("required", "False"),
                ("prompt", "None"),
            ]
        );

        let path = &test.commands[0].params[0];
        assert_eq!(path.param_type, ParamKind::Argument);
        let keys: Vec<&str> = path.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "type", "default", "required"]);
        assert_eq!(path.get("required"), Some("True"));
        assert_eq!(path.get("default"), Some("None"));
    }

    #[test]
    fn test_leaf_root_is_a_command() {
        let leaf = Mock {
            name: "solo",
            ..Default::default()
        };
        let node = Reflector::new().reflect(&leaf);
        assert!(matches!(node, Node::Command(ref c) if c.name == "solo" && c.help == "None"));
    }
}
