//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use pyscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ScaffError, ScaffResult},
};
use tracing::trace;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }

    /// Every file and directory below `root`, relative to it, sorted.
    ///
    /// `.git` internals are skipped.
    pub fn list_tree(&self, root: &Path) -> ScaffResult<Vec<PathBuf>> {
        let mut entries = Vec::new();
        let walker = WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.file_name() != ".git");

        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: root.to_path_buf(),
                reason: format!("Failed to walk directory: {}", e),
            })?;
            if let Ok(relative) = entry.path().strip_prefix(root) {
                entries.push(relative.to_path_buf());
            }
        }

        Ok(entries)
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> ScaffResult<()> {
        trace!(path = %path.display(), "create_dir");
        std::fs::create_dir(path).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                ApplicationError::TargetExists {
                    path: path.to_path_buf(),
                }
                .into()
            } else {
                map_io_error(path, e, "create directory")
            }
        })
    }

    fn create_dir_all(&self, path: &Path) -> ScaffResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffResult<()> {
        trace!(path = %path.display(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> ScaffResult<()> {
        trace!(path = %path.display(), "remove_dir_all");
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ScaffError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_reports_existing_target() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("pkg");

        fs.create_dir(&dir).unwrap();
        let err = fs.create_dir(&dir).unwrap_err();
        assert!(err.is_target_exists());
    }

    #[test]
    fn create_dir_needs_parent() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs.create_dir(&temp.path().join("a/b")).unwrap_err();
        assert!(matches!(
            err,
            ScaffError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn list_tree_is_sorted_and_relative() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&temp.path().join("pkg/.git")).unwrap();
        fs.write_file(&temp.path().join("pkg/b.txt"), "b").unwrap();
        fs.write_file(&temp.path().join("pkg/a.txt"), "a").unwrap();

        let tree = fs.list_tree(&temp.path().join("pkg")).unwrap();
        assert_eq!(tree, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }
}
