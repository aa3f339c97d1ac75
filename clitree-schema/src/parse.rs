//! Schema loading from files and strings, and descriptor rendering.

use std::{path::Path, str::FromStr};

use serde_json::Value;

use crate::{Command, Error, Format, Group, Node, NodeKind, Result, Schema, SourceContext, validate};

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Schema::from_json_str(s)
    }
}

impl Schema {
    /// Parse a JSON schema document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_str_with_filename(content, "schema.json", Format::Json)
    }

    /// Parse a YAML schema document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::from_str_with_filename(content, "schema.yaml", Format::Yaml)
    }

    /// Parse a schema file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
            .ok_or_else(|| {
                Box::new(Error::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            })?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string(), format)
    }

    /// Parse a document with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str, format: Format) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let value: Value = match format {
            Format::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?,
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| source_ctx.yaml_error(e))?,
        };
        Self::from_value(value)
    }

    /// Validate a raw document and convert it into the typed model.
    pub fn from_value(value: Value) -> Result<Self> {
        validate(&value)?;

        let Value::Array(items) = value else {
            return Err(Error::validation("$", "expected an array of groups and commands"));
        };

        let nodes = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| node_from_value(item, i))
            .collect::<Result<Vec<_>>>()?;
        Ok(Schema::new(nodes))
    }

    /// Render the schema as a JSON document with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Box::new(Error::Serialize {
                format: Format::Json,
                message: e.to_string(),
            })
        })
    }

    /// Render the schema as a YAML document.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            Box::new(Error::Serialize {
                format: Format::Yaml,
                message: e.to_string(),
            })
        })
    }
}

/// Kind of a validated top-level item.
fn classify(item: &Value) -> NodeKind {
    match item.get("kind").and_then(Value::as_str).and_then(NodeKind::from_tag) {
        Some(kind) => kind,
        None if item.get("groups").is_some() => NodeKind::Group,
        None => NodeKind::Command,
    }
}

fn node_from_value(item: Value, index: usize) -> Result<Node> {
    let path = format!("$[{}]", index);
    let node = match classify(&item) {
        NodeKind::Group => serde_json::from_value::<Group>(item).map(Node::Group),
        NodeKind::Command => serde_json::from_value::<Command>(item).map(Node::Command),
    };
    node.map_err(|e| Error::validation(path, e.to_string()))
}
