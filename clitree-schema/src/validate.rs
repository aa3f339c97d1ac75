//! Schema Validator: checks a raw document against the recursive grammar.
//!
//! The grammar, per node kind:
//!
//! - group: `name`, `help`, `hidden`, `groups`, `commands`, `params`
//! - command: `name`, `help`, `hidden`, `params`
//! - param: `name`, `help`, `type`, `default`, `required`, `prompt`, `param_type`
//!
//! Each top-level item is checked on its own: it is a group when it carries
//! `groups` (or declares `kind: "group"`), a command otherwise. Entries of a
//! `commands` array are always commands and entries of a `groups` array are
//! always groups. The first violation is reported with its document path.

use serde_json::{Map, Value};

use crate::{Error, NodeKind, Result};

const GROUP_FIELDS: &[&str] = &["name", "help", "hidden", "groups", "commands", "params"];
const COMMAND_FIELDS: &[&str] = &["name", "help", "hidden", "params"];
const PARAM_FIELDS: &[&str] = &[
    "name",
    "help",
    "type",
    "default",
    "required",
    "prompt",
    "param_type",
];

const BOOLEANS: &[&str] = &["True", "False"];
const PARAM_TYPES: &[&str] = &["STRING", "BOOL"];
const PARAM_KINDS: &[&str] = &["option"];

/// Validate a whole schema document.
pub fn validate(document: &Value) -> Result<()> {
    let ctx = ValidationContext::root();

    let items = document
        .as_array()
        .ok_or_else(|| ctx.error("expected an array of groups and commands"))?;

    for (i, item) in items.iter().enumerate() {
        validate_node(item, &ctx.index(i), None)?;
    }
    Ok(())
}

/// One step of a document path.
#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

/// Current position in the document, used to qualify error messages.
///
/// Paths render as `$[0].groups[1].params[2].type`.
#[derive(Debug, Clone)]
struct ValidationContext<'a> {
    path: Vec<Segment<'a>>,
}

impl<'a> ValidationContext<'a> {
    fn root() -> Self {
        Self { path: Vec::new() }
    }

    fn key(&self, key: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(Segment::Key(key));
        Self { path }
    }

    fn index(&self, index: usize) -> Self {
        let mut path = self.path.clone();
        path.push(Segment::Index(index));
        Self { path }
    }

    fn path_string(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.path {
            match segment {
                Segment::Key(key) => {
                    out.push('.');
                    out.push_str(key);
                }
                Segment::Index(i) => out.push_str(&format!("[{}]", i)),
            }
        }
        out
    }

    fn error(&self, message: impl Into<String>) -> Box<Error> {
        Error::validation(self.path_string(), message)
    }
}

fn validate_node(value: &Value, ctx: &ValidationContext<'_>, expected: Option<NodeKind>) -> Result<()> {
    let obj = value
        .as_object()
        .ok_or_else(|| ctx.error(format!("expected an object, found {}", type_name(value))))?;

    let kind = resolve_kind(obj, ctx, expected)?;

    let required = match kind {
        NodeKind::Group => GROUP_FIELDS,
        NodeKind::Command => COMMAND_FIELDS,
    };
    require_fields(obj, ctx, required)?;

    if kind == NodeKind::Command {
        for forbidden in ["groups", "commands"] {
            if obj.contains_key(forbidden) {
                return Err(ctx
                    .key(forbidden)
                    .error(format!("a command cannot carry '{}'", forbidden)));
            }
        }
    }

    for field in ["name", "help"] {
        expect_string(obj, ctx, field)?;
    }
    expect_enum(obj, ctx, "hidden", BOOLEANS)?;
    if obj.contains_key("permission") {
        expect_string(obj, ctx, "permission")?;
    }

    // Every child list must be an array before any of them is descended into
    let params = expect_array(obj, ctx, "params")?;
    let children = match kind {
        NodeKind::Group => Some((
            expect_array(obj, ctx, "commands")?,
            expect_array(obj, ctx, "groups")?,
        )),
        NodeKind::Command => None,
    };

    let params_ctx = ctx.key("params");
    for (i, param) in params.iter().enumerate() {
        validate_param(param, &params_ctx.index(i))?;
    }

    if let Some((commands, groups)) = children {
        let commands_ctx = ctx.key("commands");
        for (i, command) in commands.iter().enumerate() {
            validate_node(command, &commands_ctx.index(i), Some(NodeKind::Command))?;
        }

        let groups_ctx = ctx.key("groups");
        for (i, group) in groups.iter().enumerate() {
            validate_node(group, &groups_ctx.index(i), Some(NodeKind::Group))?;
        }
    }

    Ok(())
}

/// Decide the kind of a node from its position, explicit tag and structure.
fn resolve_kind(
    obj: &Map<String, Value>,
    ctx: &ValidationContext<'_>,
    expected: Option<NodeKind>,
) -> Result<NodeKind> {
    let declared = match obj.get("kind") {
        None => None,
        Some(Value::String(tag)) => Some(NodeKind::from_tag(tag).ok_or_else(|| {
            ctx.key("kind").error(format!(
                "unknown kind '{}' (expected \"group\" or \"command\")",
                tag
            ))
        })?),
        Some(other) => {
            return Err(ctx
                .key("kind")
                .error(format!("expected a string, found {}", type_name(other))));
        }
    };

    let kind = match (expected, declared) {
        (Some(expected), Some(declared)) if expected != declared => {
            return Err(ctx.key("kind").error(format!(
                "expected a {} here, found kind '{}'",
                expected, declared
            )));
        }
        (Some(expected), _) => expected,
        (None, Some(declared)) => declared,
        (None, None) if obj.contains_key("groups") => NodeKind::Group,
        (None, None) => NodeKind::Command,
    };

    Ok(kind)
}

fn validate_param(value: &Value, ctx: &ValidationContext<'_>) -> Result<()> {
    let obj = value
        .as_object()
        .ok_or_else(|| ctx.error(format!("expected an object, found {}", type_name(value))))?;

    require_fields(obj, ctx, PARAM_FIELDS)?;

    // Every attribute is carried as a string, including ones outside the grammar
    for key in obj.keys() {
        expect_string(obj, ctx, key)?;
    }

    expect_enum(obj, ctx, "type", PARAM_TYPES)?;
    expect_enum(obj, ctx, "required", BOOLEANS)?;
    expect_enum(obj, ctx, "param_type", PARAM_KINDS)?;
    Ok(())
}

fn require_fields(obj: &Map<String, Value>, ctx: &ValidationContext<'_>, fields: &[&str]) -> Result<()> {
    match fields.iter().find(|field| !obj.contains_key(**field)) {
        Some(missing) => Err(ctx.error(format!("missing required field '{}'", missing))),
        None => Ok(()),
    }
}

fn expect_string<'v>(
    obj: &'v Map<String, Value>,
    ctx: &ValidationContext<'_>,
    field: &str,
) -> Result<&'v str> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(Error::validation(
            ctx.key(field).path_string(),
            format!("expected a string, found {}", type_name(other)),
        )),
        None => Err(ctx.error(format!("missing required field '{}'", field))),
    }
}

fn expect_enum(
    obj: &Map<String, Value>,
    ctx: &ValidationContext<'_>,
    field: &str,
    allowed: &[&str],
) -> Result<()> {
    let value = expect_string(obj, ctx, field)?;
    if allowed.contains(&value) {
        return Ok(());
    }

    let expected = allowed
        .iter()
        .map(|a| format!("\"{}\"", a))
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::validation(
        ctx.key(field).path_string(),
        format!("unsupported value \"{}\" (expected one of {})", value, expected),
    ))
}

fn expect_array<'v>(
    obj: &'v Map<String, Value>,
    ctx: &ValidationContext<'_>,
    field: &str,
) -> Result<&'v Vec<Value>> {
    match obj.get(field) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(Error::validation(
            ctx.key(field).path_string(),
            format!("expected an array, found {}", type_name(other)),
        )),
        None => Err(ctx.error(format!("missing required field '{}'", field))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
