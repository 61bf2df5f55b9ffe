//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::domain::PackageSpec;
use crate::error::ScaffResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pyscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `pyscaff_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a single directory. The parent must exist.
    ///
    /// Fails with `ApplicationError::TargetExists` when `path` is already
    /// present, so existence check and creation are one step.
    fn create_dir(&self, path: &Path) -> ScaffResult<()>;

    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> ScaffResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ScaffResult<()>;
}

/// Port for initialising a repository in a freshly created package.
///
/// Implemented by:
/// - `pyscaff_adapters::vcs::GitCli` (runs `git init`)
/// - `pyscaff_adapters::vcs::NoVcs` (does nothing)
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Short tool name for logs.
    fn name(&self) -> &'static str;

    /// Initialise a repository rooted at `path`.
    fn init(&self, path: &Path) -> ScaffResult<()>;
}

/// Extension point: collect package metadata interactively.
///
/// Receives the spec built from flags and defaults and returns the spec the
/// user confirmed.
#[cfg_attr(test, mockall::automock)]
pub trait SpecPrompt: Send + Sync {
    fn prompt(&self, current: &PackageSpec) -> ScaffResult<PackageSpec>;
}

/// Extension point: bump the version recorded in a generated manifest.
///
/// Returns the version written.
#[cfg_attr(test, mockall::automock)]
pub trait VersionUpdater: Send + Sync {
    fn update_version(&self, manifest: &Path, spec: &PackageSpec) -> ScaffResult<String>;
}
