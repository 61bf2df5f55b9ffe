//! Version control adapters.

use std::path::Path;
use std::process::Command;

use pyscaff_core::{
    application::{ApplicationError, ports::VersionControl},
    error::ScaffResult,
};
use tracing::{debug, instrument};

/// Runs `git init` through the system `git` binary.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: "git".into(),
        }
    }

    /// Use a specific executable instead of `git` from `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    fn name(&self) -> &'static str {
        "git"
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn init(&self, path: &Path) -> ScaffResult<()> {
        let output = Command::new(&self.program)
            .args(["init", "-q"])
            .current_dir(path)
            .output()
            .map_err(|e| ApplicationError::VersionControlFailed {
                path: path.to_path_buf(),
                reason: format!("failed to run {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            return Err(ApplicationError::VersionControlFailed {
                path: path.to_path_buf(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        debug!("git repository initialised");
        Ok(())
    }
}

/// Skips repository initialisation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVcs;

impl VersionControl for NoVcs {
    fn name(&self) -> &'static str {
        "none"
    }

    fn init(&self, _path: &Path) -> ScaffResult<()> {
        Ok(())
    }
}
