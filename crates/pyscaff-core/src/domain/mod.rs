//! Core domain layer for pyscaff.
//!
//! Pure logic with no I/O: package metadata, text utilities, and the
//! renderers that turn metadata into file contents. Writing those files is
//! done through ports defined in the application layer.

pub mod artifacts;
pub mod error;
pub mod package_spec;
pub mod project_structure;
pub mod text;

pub use error::DomainError;
pub use package_spec::{PackageDefaults, PackageSpec, PackageSpecBuilder};
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
