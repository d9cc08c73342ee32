mod config;
mod document;

pub use config::{CONFIG_FILE, MatchMode, ScanConfig};
pub use document::{EnvDocument, Folder, PYTHONPATH_VAR, Settings, WorkspaceDocument};
