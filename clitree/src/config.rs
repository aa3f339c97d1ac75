//! Optional `clitree.toml` project configuration.
//!
//! ```toml
//! [project]
//! name = "cat"
//! schema = "schema.json"
//! entry = "cat"
//!
//! [export]
//! permission = "developer"
//! ```
//!
//! Command-line flags override every value here.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde::Deserialize;

pub const DEFAULT_CONFIG: &str = "clitree.toml";
pub const DEFAULT_SCHEMA: &str = "schema.json";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub project: ProjectConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub name: Option<String>,
    pub schema: Option<PathBuf>,
    pub entry: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub permission: Option<String>,
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicitly named file must exist; the default `clitree.toml` is
    /// optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG).is_file() => Self::from_file(DEFAULT_CONFIG),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        let config = Self::parse(&content)
            .wrap_err_with(|| format!("failed to parse {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Schema path: the flag, else the configured one, else `schema.json`
    pub fn schema_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.project.schema.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA))
    }

    /// Entry point: the flag, else the configured one
    pub fn entry(&self, flag: Option<&str>) -> Option<String> {
        flag.map(str::to_string)
            .or_else(|| self.project.entry.clone())
    }
}
