use std::{fmt, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for clitree-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Serialization format of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from a file extension (`json`, `yaml`, `yml`).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Yaml => write!(f, "YAML"),
        }
    }
}

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a JSON syntax error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let offset = offset_of(&self.src, source.line(), source.column());
        Box::new(Error::Parse {
            src: self.named_source(),
            span: offset.map(|o| SourceSpan::from((o, 0))),
            format: Format::Json,
            message: source.to_string(),
        })
    }

    /// Create a parse error from a YAML syntax error.
    pub fn yaml_error(&self, source: serde_yaml::Error) -> Box<Error> {
        let span = source
            .location()
            .map(|location| SourceSpan::from((location.index(), 0)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            format: Format::Yaml,
            message: source.to_string(),
        })
    }
}

/// Byte offset of a 1-based line/column position, if it lies inside `src`.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset <= src.len()).then_some(offset)
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(clitree::io_error),
        help("pass an existing schema file with --schema")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported schema file '{path}'")]
    #[diagnostic(code(clitree::unsupported_format), help("use a .json, .yaml or .yml file"))]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse {format} schema")]
    #[diagnostic(code(clitree::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        format: Format,
        message: String,
    },

    #[error("{path}: {message}")]
    #[diagnostic(
        code(clitree::validation_error),
        help("every group needs name, help, hidden, groups, commands and params; every command needs name, help, hidden and params")
    )]
    Validation { path: String, message: String },

    #[error("failed to serialize schema as {format}: {message}")]
    #[diagnostic(code(clitree::serialize_error))]
    Serialize { format: Format, message: String },
}

impl Error {
    /// Create a validation error at the given document path
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Validation {
            path: path.into(),
            message: message.into(),
        })
    }

    /// Document path of a validation error, if this is one
    pub fn validation_path(&self) -> Option<&str> {
        match self {
            Error::Validation { path, .. } => Some(path),
            _ => None,
        }
    }
}
