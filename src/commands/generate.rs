use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::artifacts::{write_env_file, write_workspace_file};
use crate::output::Output;
use crate::scan::TreeWalker;
use crate::types::{CONFIG_FILE, EnvDocument, ScanConfig, WorkspaceDocument};

/// Options for the generate command
pub struct GenerateOptions {
    /// Root of the source tree (default: current directory)
    pub path: Option<PathBuf>,
}

/// What a generate run produced
#[derive(Debug)]
pub struct GenerateReport {
    pub root: PathBuf,
    /// Qualifying directories, in discovery order
    pub folders: Vec<PathBuf>,
    /// Set when the workspace file was written
    pub workspace_file: Option<PathBuf>,
    /// Set when the env file was written
    pub env_file: Option<PathBuf>,
}

/// Scan the tree and write `<root>.code-workspace` and `<root>/.env`.
///
/// Only an unresolvable root is an error. A failed write is reported and the
/// other file is still attempted.
pub fn generate(opts: GenerateOptions, out: &Output) -> Result<GenerateReport> {
    let root = match opts.path {
        Some(path) => path,
        None => env::current_dir().context("failed to get current directory")?,
    };

    out.status("Target", &root.display().to_string());

    let config = ScanConfig::load_for_root(&root).unwrap_or_else(|e| {
        out.warn(&format!("ignoring {}: {:#}", CONFIG_FILE, e));
        ScanConfig::default()
    });

    let folders = TreeWalker::new(&config).scan(&root);
    let workspace = WorkspaceDocument::new(folders.iter().cloned());

    let workspace_file = match write_workspace_file(&root, &workspace) {
        Ok(path) => {
            out.status("Wrote", &format!("workspace file {}", path.display()));
            Some(path)
        }
        Err(e) => {
            out.error(&e);
            None
        }
    };

    let env_file = match write_env_file(&root, &EnvDocument::new(&root)) {
        Ok(path) => {
            out.status("Wrote", &format!("env file {}", path.display()));
            Some(path)
        }
        Err(e) => {
            out.error(&e);
            None
        }
    };

    out.success(&format!(
        "{} source folder(s) found",
        workspace.source_folder_count()
    ));
    out.flush();

    Ok(GenerateReport {
        root,
        folders,
        workspace_file,
        env_file,
    })
}
