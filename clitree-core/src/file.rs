use std::path::{Path, PathBuf};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render the file into an artifact rooted at `base`
    fn artifact(&self, base: &Path) -> Artifact {
        Artifact::new(self.path(base), self.render())
    }
}

/// A generated text blob paired with its destination path.
///
/// Artifacts are produced in full before anything touches the filesystem,
/// so a caller can decide to write all of them or none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    path: PathBuf,
    content: String,
}

impl Artifact {
    /// Create a new artifact with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the artifact content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the artifact to its path.
    ///
    /// The parent directory must already exist; it is never created here.
    pub fn write(&self) -> std::io::Result<()> {
        std::fs::write(&self.path, &self.content)
    }
}
