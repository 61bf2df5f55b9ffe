//! Pyscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pyscaff
//! boilerplate generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pyscaff-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │              (Scaffolder)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, VersionControl, SpecPrompt,│
//! │            VersionUpdater)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    pyscaff-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem,    │
//! │           GitCli, NoVcs)                │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (PackageSpec, text utilities, artifacts)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pyscaff_core::prelude::*;
//!
//! # fn adapters() -> (Box<dyn Filesystem>, Box<dyn VersionControl>) { unimplemented!() }
//! let spec = PackageSpec::builder()
//!     .name("test_package")
//!     .description("This is a test package!")
//!     .root("/tmp")
//!     .build()
//!     .unwrap();
//!
//! let (filesystem, vcs) = adapters();
//! let scaffolder = Scaffolder::new(spec, filesystem, vcs);
//! scaffolder.scaffold().unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CleanOutcome, Scaffolder,
        ports::{Filesystem, SpecPrompt, VersionControl, VersionUpdater},
    };
    pub use crate::domain::{PackageDefaults, PackageSpec, PackageSpecBuilder, ProjectStructure};
    pub use crate::error::{ScaffError, ScaffResult};
}
