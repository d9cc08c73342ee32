use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::filter::{ExclusionSet, has_source_files};
use crate::types::ScanConfig;

/// Depth-first walker that finds directories holding source files.
///
/// A directory is yielded before anything below it. Excluded directories are
/// pruned with their whole subtree; every other directory is descended into,
/// whether or not it qualified itself. Sibling order is the order the
/// directory listing returns, no sorting is applied.
///
/// Symlinked directories are followed. A link that points back at one of its
/// ancestors is skipped, and nothing deeper than `max_depth` is visited.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    exclusions: ExclusionSet,
    source_marker: String,
    max_depth: usize,
}

impl TreeWalker {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            exclusions: ExclusionSet::new(config.exclude.iter().cloned(), config.match_mode),
            source_marker: config.source_marker.clone(),
            max_depth: config.max_depth,
        }
    }

    /// Lazily yield qualifying directories below `root`, in discovery order
    pub fn walk(&self, root: &Path) -> impl Iterator<Item = PathBuf> + '_ {
        WalkDir::new(root)
            .follow_links(true)
            .min_depth(1)
            .max_depth(self.max_depth)
            .into_iter()
            .filter_entry(move |entry| {
                // The root itself is never tested
                entry.depth() == 0
                    || !(entry.file_type().is_dir() && self.exclusions.is_excluded(entry.path()))
            })
            // Unreadable directories, dangling links and loops
            .flatten()
            .filter(|entry| entry.file_type().is_dir())
            .filter(move |entry| has_source_files(entry.path(), &self.source_marker))
            .map(DirEntry::into_path)
    }

    /// Collect all qualifying directories below `root`
    pub fn scan(&self, root: &Path) -> Vec<PathBuf> {
        self.walk(root).collect()
    }
}
