use std::path::{Path, PathBuf};

use clitree_core::GeneratedFile;

/// The generated interface source, `<project_name>cli.py`
pub struct CliPy {
    project_name: String,
    source: String,
}

impl CliPy {
    pub fn new(project_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            source: source.into(),
        }
    }
}

impl GeneratedFile for CliPy {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}cli.py", self.project_name))
    }

    fn render(&self) -> String {
        self.source.clone()
    }
}
