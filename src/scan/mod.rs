mod filter;
mod walker;

pub use filter::{ExclusionSet, has_source_files};
pub use walker::TreeWalker;
