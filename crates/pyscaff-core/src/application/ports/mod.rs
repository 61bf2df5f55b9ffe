//! Application ports (traits) for external dependencies.
//!
//! Adapters in `pyscaff-adapters` implement the filesystem and version
//! control ports. `SpecPrompt` and `VersionUpdater` are extension points
//! with no shipped adapter.

pub mod output;

pub use output::{Filesystem, SpecPrompt, VersionControl, VersionUpdater};

#[cfg(test)]
pub use output::{MockFilesystem, MockSpecPrompt, MockVersionControl, MockVersionUpdater};
