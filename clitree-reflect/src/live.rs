/// Introspection surface of a live command tree.
///
/// The [`Reflector`](crate::Reflector) depends only on this contract, never
/// on the internals of the host framework.
pub trait LiveCommand {
    fn name(&self) -> &str;

    /// Help text, if any
    fn help(&self) -> Option<String>;

    fn is_hidden(&self) -> bool;

    /// Permission level attached to the node, if the host carries one
    fn permission(&self) -> Option<String>;

    /// Whether the node can own children
    fn is_group(&self) -> bool;

    /// Child commands, in registration order
    fn children(&self) -> Vec<&Self>;

    /// Snapshots of the attached parameters, in declaration order
    fn params(&self) -> Vec<LiveParam>;
}

/// A parameter of a live node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveParam {
    Option {
        name: String,
        help: Option<String>,
        value_type: Option<String>,
        default: Option<String>,
        required: bool,
        prompt: Option<String>,
    },
    Argument {
        name: String,
        value_type: Option<String>,
        default: Option<String>,
        required: bool,
    },
}

impl LiveParam {
    pub fn name(&self) -> &str {
        match self {
            LiveParam::Option { name, .. } | LiveParam::Argument { name, .. } => name,
        }
    }
}
