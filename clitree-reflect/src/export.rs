use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

use crate::{LiveCommand, Reflector};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render reflected schema")]
    Render(#[source] Box<clitree_schema::Error>),

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reflect `root` and write it to `path` as a pretty JSON descriptor.
///
/// Returns the written text so the caller can echo it.
pub fn export<C: LiveCommand>(
    reflector: &Reflector,
    root: &C,
    path: impl AsRef<Path>,
) -> Result<String, ExportError> {
    export_all(reflector, std::slice::from_ref(root), path)
}

/// Like [`export`], for a tree with several top-level roots.
pub fn export_all<C: LiveCommand>(
    reflector: &Reflector,
    roots: &[C],
    path: impl AsRef<Path>,
) -> Result<String, ExportError> {
    let path = path.as_ref();
    let schema = reflector.reflect_all(roots);
    let mut text = schema.to_json_pretty().map_err(ExportError::Render)?;
    text.push('\n');

    fs::write(path, &text).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), nodes = schema.node_count(), "exported schema");
    Ok(text)
}
