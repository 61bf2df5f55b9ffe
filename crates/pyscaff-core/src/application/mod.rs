//! Application layer for pyscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Scaffolder)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences side effects but renders nothing itself.
//! All file contents come from `crate::domain::artifacts`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{CleanOutcome, Scaffolder};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, SpecPrompt, VersionControl, VersionUpdater};

pub use error::ApplicationError;
