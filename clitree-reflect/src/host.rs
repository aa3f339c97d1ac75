//! Build a live `clap` command tree from a schema.
//!
//! This is the host side of the round trip. [`build`] realizes the raw
//! schema; [`build_compiled`] realizes the compiler's declarations, so a
//! schema lowered and built that way reflects back to the same schema.
//! Prompts have no clap counterpart and are dropped.

use clap::{Arg, ArgAction, value_parser};
use clitree_codegen::{Declaration, Literal, OptionDecl, Parent, ValueType};
use clitree_schema::{Command, Group, NONE_SENTINEL, Node, NodeKind, Param, ParamKind, Schema};

/// Realize every top-level node of `schema` as a `clap::Command`.
pub fn build(schema: &Schema) -> Vec<clap::Command> {
    schema.nodes.iter().map(build_node).collect()
}

pub fn build_node(node: &Node) -> clap::Command {
    match node {
        Node::Group(group) => build_group(group),
        Node::Command(command) => build_command(command),
    }
}

fn build_group(group: &Group) -> clap::Command {
    let mut cmd = base(&group.name, &group.help, &group.hidden, &group.params)
        .subcommand_required(true);
    for command in &group.commands {
        cmd = cmd.subcommand(build_command(command));
    }
    for child in &group.groups {
        cmd = cmd.subcommand(build_group(child));
    }
    cmd
}

fn build_command(command: &Command) -> clap::Command {
    base(&command.name, &command.help, &command.hidden, &command.params)
}

fn base(name: &str, help: &str, hidden: &str, params: &[Param]) -> clap::Command {
    let mut cmd = clap::Command::new(name.to_string()).hide(hidden == "True");
    if help != NONE_SENTINEL {
        cmd = cmd.about(help.to_string());
    }
    cmd.args(params.iter().filter_map(build_arg))
}

fn build_arg(param: &Param) -> Option<Arg> {
    let name = param.name()?.to_string();
    let is_bool = param.get("type") == Some("BOOL");

    let mut arg = Arg::new(name.clone())
        .action(ArgAction::Set)
        .num_args(1)
        .required(param.get("required") == Some("True"));

    if param.param_type == ParamKind::Option {
        arg = arg.long(name);
    }
    if let Some(help) = param.get("help").filter(|h| *h != NONE_SENTINEL) {
        arg = arg.help(help.to_string());
    }
    if is_bool {
        arg = arg.value_parser(value_parser!(bool));
    }
    if let Some(default) = param.get("default").filter(|d| *d != NONE_SENTINEL) {
        let default = match (is_bool, default) {
            (true, "True") => "true".to_string(),
            (true, "False") => "false".to_string(),
            _ => default.to_string(),
        };
        arg = arg.default_value(default);
    }
    Some(arg)
}

/// Realize lowered declarations as `clap` commands, one per top-level node.
///
/// Children are found through their `Parent` link, so declarations must come
/// from a single `lower` run.
pub fn build_compiled(declarations: &[Declaration]) -> Vec<clap::Command> {
    children_of(declarations, &Parent::Root)
}

fn children_of(declarations: &[Declaration], parent: &Parent) -> Vec<clap::Command> {
    declarations
        .iter()
        .filter(|declaration| declaration.parent == *parent)
        .map(|declaration| build_declaration(declaration, declarations))
        .collect()
}

fn build_declaration(declaration: &Declaration, all: &[Declaration]) -> clap::Command {
    let name = match declaration.attributes.get("name") {
        Some(Literal::Str(name)) => name.clone(),
        _ => declaration.identifier.clone(),
    };
    let hidden = declaration.attributes.get("hidden") == Some(&Literal::Bool(true));

    let mut cmd = clap::Command::new(name)
        .hide(hidden)
        .args(declaration.options.iter().map(compiled_arg));
    if let Some(Literal::Str(help)) = declaration.attributes.get("help") {
        cmd = cmd.about(help.clone());
    }

    if declaration.kind == NodeKind::Group {
        let this = Parent::Node(declaration.identifier.clone());
        cmd = cmd
            .subcommand_required(true)
            .subcommands(children_of(all, &this));
    }
    cmd
}

fn compiled_arg(option: &OptionDecl) -> Arg {
    let is_bool = option.value_type == Some(ValueType::Bool);
    let mut arg = Arg::new(option.argument.clone())
        .long(option.flag.trim_start_matches('-').to_string())
        .action(ArgAction::Set)
        .num_args(1)
        .required(option.attributes.get("required") == Some(&Literal::Bool(true)));

    if let Some(Literal::Str(help)) = option.attributes.get("help") {
        arg = arg.help(help.clone());
    }
    if is_bool {
        arg = arg.value_parser(value_parser!(bool));
    }
    let default = match option.attributes.get("default") {
        Some(Literal::Str(value)) => Some(value.clone()),
        Some(Literal::Bool(value)) => Some(value.to_string()),
        Some(Literal::Int(value)) => Some(value.to_string()),
        Some(Literal::None) | None => None,
    };
    if let Some(default) = default {
        arg = arg.default_value(default);
    }
    arg
}
