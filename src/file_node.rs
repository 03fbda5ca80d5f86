use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::instrument;
use walkdir::WalkDir;

use crate::lazy::LazyTreeNode;

/// Lazy tree node backed by a filesystem path.
///
/// A directory's children are its immediate entries sorted by file name.
/// Symbolic links are never expanded, so link loops cannot blow up a fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    path: PathBuf,
}

impl FileNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        fs::symlink_metadata(&self.path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}

impl fmt::Display for FileNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path.file_name() {
            Some(name) => write!(f, "{}", name.to_string_lossy()),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

impl LazyTreeNode for FileNode {
    type Error = walkdir::Error;

    fn has_child_nodes_to_fill(&self) -> bool {
        self.is_dir()
    }

    #[instrument(level = "trace")]
    fn fill_child_nodes(&self) -> Result<Vec<Self>, Self::Error> {
        WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| entry.map(|e| FileNode::new(e.into_path())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_file_name() {
        assert_eq!(FileNode::new("/tmp/some/dir.txt").to_string(), "dir.txt");
        assert_eq!(FileNode::new("/").to_string(), "/");
    }

    #[test]
    fn test_missing_path_is_not_fillable() {
        let node = FileNode::new("/definitely/not/here/rstree");
        assert!(!node.has_child_nodes_to_fill());
    }
}
