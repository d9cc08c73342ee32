use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Optional per-tree config file, looked up in the scan root
pub const CONFIG_FILE: &str = ".pyspace.yaml";

/// Folder-name tokens that prune traversal, in match order
const DEFAULT_EXCLUDE: [&str; 8] = [
    "out",
    "bin",
    "report",
    "results",
    "logs",
    "build",
    "__pycache__",
    "node_modules",
];

const DEFAULT_SOURCE_MARKER: &str = ".py";

const DEFAULT_MAX_DEPTH: usize = 64;

/// How exclusion tokens are matched against a candidate path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Token appears anywhere in the path text (`outline` matches `out`)
    #[default]
    Substring,
    /// Token equals one whole path component
    Segment,
}

/// Scan configuration (.pyspace.yaml in the scan root)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Tokens that exclude a directory and its whole subtree
    pub exclude: Vec<String>,

    /// Substring an entry name must contain to count as a source file
    pub source_marker: String,

    /// Matching strategy for `exclude`
    pub match_mode: MatchMode,

    /// Deepest directory level below the root that is visited
    pub max_depth: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            source_marker: DEFAULT_SOURCE_MARKER.to_string(),
            match_mode: MatchMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ScanConfig {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: ScanConfig = serde_yml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Load the config file of a scan root, or the defaults if it has none
    pub fn load_for_root(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Reject values that would make every path match
    pub fn validate(&self) -> Result<()> {
        if self.exclude.iter().any(|token| token.is_empty()) {
            bail!("exclude list contains an empty token");
        }
        if self.source_marker.is_empty() {
            bail!("source_marker must not be empty");
        }
        if self.max_depth == 0 {
            bail!("max_depth must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.exclude.len(), 8);
        assert_eq!(config.exclude[0], "out");
        assert_eq!(config.exclude[7], "node_modules");
        assert_eq!(config.source_marker, ".py");
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "match_mode: segment\nmax_depth: 3\n").unwrap();

        let config = ScanConfig::load(&path).unwrap();
        assert_eq!(config.match_mode, MatchMode::Segment);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.source_marker, ".py");
        assert_eq!(config.exclude, ScanConfig::default().exclude);
    }

    #[test]
    fn test_load_for_root_without_file() {
        let dir = TempDir::new().unwrap();
        let config = ScanConfig::load_for_root(dir.path()).unwrap();
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn test_load_for_root_with_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "exclude: [venv]\nsource_marker: .pyx\n",
        )
        .unwrap();

        let config = ScanConfig::load_for_root(dir.path()).unwrap();
        assert_eq!(config.exclude, vec!["venv".to_string()]);
        assert_eq!(config.source_marker, ".pyx");
    }

    #[test]
    fn test_rejects_empty_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "exclude: [build, '']\n").unwrap();

        let err = ScanConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("empty token"));
    }

    #[test]
    fn test_rejects_empty_marker_and_zero_depth() {
        let config = ScanConfig {
            source_marker: String::new(),
            ..ScanConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ScanConfig {
            max_depth: 0,
            ..ScanConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "exclude: {not: [a list\n").unwrap();

        let err = ScanConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }
}
