//! Application layer errors.
//!
//! These errors represent failures in orchestration, not invalid metadata.
//! Metadata errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The package root already exists; nothing was written.
    #[error("Path {path} already exists")]
    TargetExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Version-control initialisation failed.
    #[error("Version control init failed at {path}: {reason}")]
    VersionControlFailed { path: PathBuf, reason: String },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Adapter state is poisoned")]
    LockPoisoned,

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Run `pyscaff clean <NAME>` to remove it first (destructive)".into(),
                "Choose a different package name or --root".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::VersionControlFailed { .. } => vec![
                "Ensure `git` is installed and in your PATH".into(),
                "Or pass --no-git to skip repository initialisation".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This operation has no built-in implementation yet".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::VersionControlFailed { .. } => {
                ErrorCategory::Internal
            }
            Self::LockPoisoned => ErrorCategory::Internal,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
        }
    }
}
