//! Project Orchestrator: compiles a schema and lays out a project directory.

use std::{
    error::Error as StdError,
    fs, io,
    path::{Path, PathBuf},
};

use clitree_codegen::{ConfigurationError, compile_source};
use clitree_core::{Artifact, GeneratedFile};
use clitree_schema::Schema;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    ClickTarget,
    files::{CliPy, SchemaJson, SchemaYaml},
};

/// Error raised while asking whether to replace an existing project
pub type PromptError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("invalid project name '{name}': it must be a plain file name prefix")]
    InvalidName { name: String },

    #[error("'{path}' already exists")]
    AlreadyExists { path: PathBuf },

    #[error("failed to create '{path}'")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove '{path}'")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to confirm replacing '{path}'")]
    Prompt {
        path: PathBuf,
        #[source]
        source: PromptError,
    },

    #[error("failed to render schema descriptor")]
    Render(#[source] Box<clitree_schema::Error>),

    #[error(transparent)]
    Config(#[from] ConfigurationError),
}

/// Decides whether an existing project directory may be replaced.
pub trait ReplacePrompt {
    fn confirm_replace(&self, path: &Path) -> Result<bool, PromptError>;
}

/// Always replace an existing directory (`--force`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysReplace;

impl ReplacePrompt for AlwaysReplace {
    fn confirm_replace(&self, _path: &Path) -> Result<bool, PromptError> {
        Ok(true)
    }
}

/// Never replace an existing directory
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverReplace;

impl ReplacePrompt for NeverReplace {
    fn confirm_replace(&self, _path: &Path) -> Result<bool, PromptError> {
        Ok(false)
    }
}

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    pub path: PathBuf,
    /// Files written, in order
    pub files: Vec<PathBuf>,
    /// Whether an existing directory was replaced
    pub replaced: bool,
}

/// Generates a Click project from a schema.
///
/// ```no_run
/// use clitree_codegen_click::{AlwaysReplace, ProjectGenerator};
/// use clitree_schema::Schema;
///
/// let schema = Schema::from_file("schema.json").unwrap();
/// ProjectGenerator::new("cat", "cat")
///     .generate(&schema, &AlwaysReplace)
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ProjectGenerator {
    path: PathBuf,
    name: String,
    entry_point: Option<String>,
}

impl ProjectGenerator {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            entry_point: None,
        }
    }

    /// Invoke `entry_point` from the generated footer instead of the first node
    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = Some(entry_point.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render every project artifact in memory, without touching the disk.
    ///
    /// Artifacts are the interface source, `schema.json` and `schema.yaml`,
    /// in that order.
    pub fn artifacts(&self, schema: &Schema) -> Result<Vec<Artifact>, ProjectError> {
        if !is_plain_name(&self.name) {
            return Err(ProjectError::InvalidName {
                name: self.name.clone(),
            });
        }

        let source = compile_source(schema, &ClickTarget, self.entry_point.as_deref())?;

        let files: Vec<Box<dyn GeneratedFile>> = vec![
            Box::new(CliPy::new(&self.name, source)),
            Box::new(SchemaJson::new(schema).map_err(ProjectError::Render)?),
            Box::new(SchemaYaml::new(schema).map_err(ProjectError::Render)?),
        ];

        Ok(files.iter().map(|file| file.artifact(&self.path)).collect())
    }

    /// Compile the schema and write the project directory.
    ///
    /// Compilation happens first, so a schema error leaves the disk
    /// untouched. An existing directory is only replaced when `prompt`
    /// agrees. If a write fails, the project directory is removed.
    pub fn generate(
        &self,
        schema: &Schema,
        prompt: &dyn ReplacePrompt,
    ) -> Result<GeneratedProject, ProjectError> {
        let artifacts = self.artifacts(schema)?;

        let replaced = self.prepare_directory(prompt)?;

        fs::create_dir(&self.path).map_err(|source| ProjectError::Create {
            path: self.path.clone(),
            source,
        })?;

        let mut files = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            if let Err(source) = artifact.write() {
                self.clean_up();
                return Err(ProjectError::Write {
                    path: artifact.path().to_path_buf(),
                    source,
                });
            }
            info!(path = %artifact.path().display(), "wrote file");
            files.push(artifact.path().to_path_buf());
        }

        Ok(GeneratedProject {
            path: self.path.clone(),
            files,
            replaced,
        })
    }

    /// Remove an existing project directory if the prompt allows it.
    fn prepare_directory(&self, prompt: &dyn ReplacePrompt) -> Result<bool, ProjectError> {
        if !self.path.exists() {
            return Ok(false);
        }

        let replace = prompt
            .confirm_replace(&self.path)
            .map_err(|source| ProjectError::Prompt {
                path: self.path.clone(),
                source,
            })?;
        if !replace {
            return Err(ProjectError::AlreadyExists {
                path: self.path.clone(),
            });
        }

        info!(path = %self.path.display(), "replacing existing project");
        remove_path(&self.path).map_err(|source| ProjectError::Remove {
            path: self.path.clone(),
            source,
        })?;
        Ok(true)
    }

    fn clean_up(&self) {
        match fs::remove_dir_all(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed partial project"),
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove partial project"
            ),
        }
    }
}

fn remove_path(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// The name becomes part of a file name inside the project directory
fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != ".." && !name.chars().any(|c| c == '/' || std::path::is_separator(c))
}
