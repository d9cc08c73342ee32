use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

/// Search-path variable exported by the env file
pub const PYTHONPATH_VAR: &str = "PYTHONPATH";

/// Marker for the workspace root folder, always listed first
const ROOT_FOLDER: &str = ".";

/// One entry of the workspace `folders` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub path: String,
}

/// Fixed `settings` block of the workspace file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "python.analysis.extraPaths")]
    pub extra_paths: Vec<String>,
}

/// VS Code multi-root workspace descriptor (<root>.code-workspace)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceDocument {
    pub folders: Vec<Folder>,
    pub settings: Settings,
}

impl WorkspaceDocument {
    /// Build the document from source folders in discovery order
    pub fn new<I>(source_dirs: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut folders = vec![Folder {
            path: ROOT_FOLDER.to_string(),
        }];
        folders.extend(source_dirs.into_iter().map(|dir| Folder {
            path: dir.to_string_lossy().into_owned(),
        }));

        Self {
            folders,
            settings: Settings::default(),
        }
    }

    /// Number of discovered source folders (excluding the root marker)
    pub fn source_folder_count(&self) -> usize {
        self.folders.len().saturating_sub(1)
    }

    /// Render as 4-space indented JSON with a trailing newline
    pub fn render(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;

        // serde_json only emits UTF-8
        let mut text =
            String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)?;
        text.push('\n');
        Ok(text)
    }
}

/// Environment file binding PYTHONPATH to the scan root (<root>/.env)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvDocument {
    pub root: String,
}

impl EnvDocument {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_string_lossy().into_owned(),
        }
    }

    pub fn render(&self) -> String {
        format!("{}=\"{}\"\n", PYTHONPATH_VAR, self.root)
    }
}
