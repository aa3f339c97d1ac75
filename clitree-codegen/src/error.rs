use thiserror::Error;

/// Result type for schema compilation
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// An unsupported or malformed field, type or value met during compilation.
///
/// Any of these aborts the compile; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unsupported data type '{key}'")]
    UnsupportedKey { key: String },

    #[error("invalid boolean '{value}' for '{key}' (expected \"True\" or \"False\")")]
    InvalidBoolean { key: String, value: String },

    #[error("invalid integer '{value}' for '{key}'")]
    InvalidInteger { key: String, value: String },

    #[error("option of '{node}' has a name too short to form a flag")]
    OptionNameTooShort { node: String },

    #[error("option of '{node}' has no name")]
    MissingOptionName { node: String },

    #[error("schema has no top-level node to use as entry point")]
    NoEntryPoint,

    #[error("entry point '{name}' is not a top-level node")]
    UnknownEntryPoint { name: String },
}
