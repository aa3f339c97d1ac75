//! Type Descriptor: maps logical types and field names to target literals.
//!
//! Raw attribute values keep the document encoding (`"True"`, `"None"`,
//! quoted or bare strings). Normalization turns them into a [`Literal`],
//! which a [`Target`](crate::Target) renders in its own syntax.

use clitree_schema::{Attributes, NONE_SENTINEL};
use indexmap::IndexMap;

use crate::{ConfigurationError, Result};

/// Logical value type a raw string is normalized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
    Str,
    Bool,
    None,
}

impl ValueType {
    /// Resolve a type name or a field name.
    ///
    /// ```
    /// use clitree_codegen::ValueType;
    ///
    /// assert_eq!(ValueType::lookup("STRING"), Some(ValueType::Str));
    /// assert_eq!(ValueType::lookup("hidden"), Some(ValueType::Bool));
    /// assert_eq!(ValueType::lookup("FLOAT"), None);
    /// ```
    pub fn lookup(key: &str) -> Option<Self> {
        let value_type = match key {
            "INT" => ValueType::Int,
            "STRING" | "str" => ValueType::Str,
            "None" => ValueType::None,
            "boolean" | "BOOL" => ValueType::Bool,
            "name" | "help" | "prompt" => ValueType::Str,
            "required" | "hidden" => ValueType::Bool,
            _ => return None,
        };
        Some(value_type)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Int => "int",
            ValueType::Str => "str",
            ValueType::Bool => "bool",
            ValueType::None => "none",
        }
    }
}

/// A normalized, target-independent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Str(String),
    Bool(bool),
    Int(i64),
    None,
}

impl Literal {
    /// The logical string, if this is a string literal
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Normalized attribute set of a node or parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// Attributes in their original order, without `type`
    pub attributes: IndexMap<String, Literal>,
    /// Declared value type, taken from the `type` attribute
    pub value_type: Option<ValueType>,
}

/// Normalize one raw value.
///
/// `key` is a type name (`STRING`, `INT`, ...) or a field name (`help`,
/// `hidden`, ...). The `None` sentinel always normalizes to
/// [`Literal::None`].
pub fn normalize(key: &str, raw: &str) -> Result<Literal> {
    if raw == NONE_SENTINEL {
        return Ok(Literal::None);
    }

    let value_type = ValueType::lookup(key).ok_or_else(|| ConfigurationError::UnsupportedKey {
        key: key.to_string(),
    })?;
    normalize_as(value_type, key, raw)
}

fn normalize_as(value_type: ValueType, key: &str, raw: &str) -> Result<Literal> {
    match value_type {
        ValueType::Str => Ok(Literal::Str(unquote(raw).to_string())),
        ValueType::Bool => match raw {
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            _ => Err(ConfigurationError::InvalidBoolean {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        },
        ValueType::Int => raw
            .parse::<i64>()
            .map(Literal::Int)
            .map_err(|_| ConfigurationError::InvalidInteger {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        ValueType::None => Ok(Literal::None),
    }
}

/// Strip one pair of surrounding double quotes, if present.
fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}

/// Normalize a whole attribute set.
///
/// When a `type` attribute is present it decides how `default` is
/// normalized, and is itself removed from the result. Every other
/// attribute is normalized by its field name.
pub fn normalize_all(attributes: &Attributes) -> Result<Normalized> {
    let value_type = match attributes.get("type") {
        Some(name) => Some(ValueType::lookup(name).ok_or_else(|| {
            ConfigurationError::UnsupportedKey { key: name.clone() }
        })?),
        None => None,
    };

    let mut normalized = IndexMap::with_capacity(attributes.len());
    for (key, raw) in attributes {
        let literal = match (key.as_str(), value_type) {
            ("type", _) => continue,
            ("default", Some(_)) if raw == NONE_SENTINEL => Literal::None,
            ("default", Some(value_type)) => normalize_as(value_type, key, raw)?,
            _ => normalize(key, raw)?,
        };
        normalized.insert(key.clone(), literal);
    }

    Ok(Normalized {
        attributes: normalized,
        value_type,
    })
}
