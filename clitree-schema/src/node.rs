//! Typed schema model.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sentinel used by the document encoding for an absent value
pub const NONE_SENTINEL: &str = "None";

/// Ordered attribute set of a parameter (`name`, `help`, `type`, ...).
///
/// Values keep their document encoding; interpretation is left to the
/// code generator.
pub type Attributes = IndexMap<String, String>;

/// Root of a schema document: the top-level groups and commands in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    pub nodes: Vec<Node>,
}

impl Schema {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes in the whole tree
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(Node::node_count).sum()
    }
}

/// The two node kinds of the command hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Group,
    Command,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Group => "group",
            NodeKind::Command => "command",
        }
    }

    /// Parse the optional `kind` tag of a document node
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "group" => Some(NodeKind::Group),
            "command" => Some(NodeKind::Command),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level schema node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Group(Group),
    Command(Command),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Group(_) => NodeKind::Group,
            Node::Command(_) => NodeKind::Command,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Group(g) => &g.name,
            Node::Command(c) => &c.name,
        }
    }

    pub fn help(&self) -> &str {
        match self {
            Node::Group(g) => &g.help,
            Node::Command(c) => &c.help,
        }
    }

    pub fn params(&self) -> &[Param] {
        match self {
            Node::Group(g) => &g.params,
            Node::Command(c) => &c.params,
        }
    }

    fn node_count(&self) -> usize {
        match self {
            Node::Group(g) => g.node_count(),
            Node::Command(_) => 1,
        }
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

impl From<Command> for Node {
    fn from(command: Command) -> Self {
        Node::Command(command)
    }
}

/// A node that can contain nested commands and groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub help: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    pub hidden: String,
    pub groups: Vec<Group>,
    pub commands: Vec<Command>,
    pub params: Vec<Param>,
}

impl Group {
    /// Create an empty, visible group
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            permission: None,
            hidden: "False".to_string(),
            groups: Vec::new(),
            commands: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    fn node_count(&self) -> usize {
        1 + self.commands.len() + self.groups.iter().map(Group::node_count).sum::<usize>()
    }
}

/// A leaf node exposing only parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub help: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    pub hidden: String,
    pub params: Vec<Param>,
}

impl Command {
    /// Create a visible command without parameters
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            permission: None,
            hidden: "False".to_string(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }
}

/// Parameter kind tag (`param_type` in the document)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Option,
    Argument,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Option => "option",
            ParamKind::Argument => "argument",
        }
    }
}

/// A parameter attached to a group or command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    #[serde(flatten)]
    pub attributes: Attributes,
    pub param_type: ParamKind,
}

impl Param {
    /// Create an option from `(key, value)` attribute pairs, kept in order
    pub fn option<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_kind(ParamKind::Option, attributes)
    }

    /// Create an argument from `(key, value)` attribute pairs, kept in order
    pub fn argument<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_kind(ParamKind::Argument, attributes)
    }

    fn with_kind<K, V>(kind: ParamKind, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            param_type: kind,
        }
    }

    pub fn is_option(&self) -> bool {
        self.param_type == ParamKind::Option
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }
}
