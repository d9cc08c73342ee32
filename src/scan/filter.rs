//! Directory classification predicates used by the tree walker.
//!
//! Both predicates match on plain substrings rather than globs. In substring
//! mode a directory named `outline` is excluded by the `out` token.
//! `MatchMode::Segment` matches whole path components instead.

use std::fs;
use std::path::{Component, Path};

use crate::types::MatchMode;

/// Set of tokens that prune a directory and its subtree
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    tokens: Vec<String>,
    mode: MatchMode,
}

impl ExclusionSet {
    pub fn new<I, S>(tokens: I, mode: MatchMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            mode,
        }
    }

    /// Check whether a candidate path is excluded
    pub fn is_excluded(&self, path: &Path) -> bool {
        match self.mode {
            MatchMode::Substring => {
                // Case-sensitive, separators untouched
                let text = path.to_string_lossy();
                self.tokens.iter().any(|token| text.contains(token.as_str()))
            }
            MatchMode::Segment => path.components().any(|component| match component {
                Component::Normal(name) => {
                    let name = name.to_string_lossy();
                    self.tokens.iter().any(|token| name == token.as_str())
                }
                _ => false,
            }),
        }
    }
}

/// Check if a directory directly contains an entry whose name contains `marker`.
///
/// Not recursive. Returns false when the directory cannot be read.
pub fn has_source_files(dir: &Path, marker: &str) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };

    entries
        .flatten()
        .any(|entry| entry.file_name().to_string_lossy().contains(marker))
}
