//! Writers for the generated workspace and env files.
//!
//! Each writer creates or truncates its target and writes the whole rendered
//! document in one go, so repeated runs over the same tree produce identical
//! files.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{EnvDocument, WorkspaceDocument};

/// Suffix appended to the root path to name the workspace file
pub const WORKSPACE_SUFFIX: &str = ".code-workspace";

/// Env file name inside the root
pub const ENV_FILE: &str = ".env";

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to render workspace file")]
    Render(#[from] serde_json::Error),
}

/// `<root>.code-workspace`, next to the root rather than inside it
pub fn workspace_file_path(root: &Path) -> PathBuf {
    let mut path = OsString::from(root.as_os_str());
    path.push(WORKSPACE_SUFFIX);
    PathBuf::from(path)
}

/// `<root>/.env`
pub fn env_file_path(root: &Path) -> PathBuf {
    root.join(ENV_FILE)
}

/// Write the workspace file for `root`, returning its path
pub fn write_workspace_file(
    root: &Path,
    doc: &WorkspaceDocument,
) -> Result<PathBuf, ArtifactError> {
    let content = doc.render()?;
    let path = workspace_file_path(root);
    write_file(path, &content)
}

/// Write the env file for `root`, returning its path
pub fn write_env_file(root: &Path, doc: &EnvDocument) -> Result<PathBuf, ArtifactError> {
    write_file(env_file_path(root), &doc.render())
}

fn write_file(path: PathBuf, content: &str) -> Result<PathBuf, ArtifactError> {
    match fs::write(&path, content) {
        Ok(()) => Ok(path),
        Err(source) => Err(ArtifactError::Write { path, source }),
    }
}
