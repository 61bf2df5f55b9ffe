//! Scaffolder - main application orchestrator.
//!
//! `scaffold()` runs one linear sequence:
//! 1. Create `<root>/<name>` (fails with `TargetExists` if present)
//! 2. Create the nested source directory `<root>/<name>/<name>`
//! 3. Initialise version control (best effort, failures are logged)
//! 4. Render and write README, .gitignore, setup.py, and source stubs
//!
//! A failure after step 1 propagates as-is; nothing is rolled back.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SpecPrompt, VersionControl, VersionUpdater},
    },
    domain::{FileToWrite, PackageSpec, ProjectStructure, artifacts},
    error::{ScaffError, ScaffResult},
};

/// Result of [`Scaffolder::clean`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The package root was removed.
    Removed(PathBuf),
    /// Nothing existed at the package root.
    Missing(PathBuf),
}

/// Renders every boilerplate artifact for one [`PackageSpec`].
pub struct Scaffolder {
    spec: PackageSpec,
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
    prompt: Option<Box<dyn SpecPrompt>>,
    version_updater: Option<Box<dyn VersionUpdater>>,
}

impl Scaffolder {
    /// Create a new scaffolder with the given adapters.
    pub fn new(
        spec: PackageSpec,
        filesystem: Box<dyn Filesystem>,
        vcs: Box<dyn VersionControl>,
    ) -> Self {
        Self {
            spec,
            filesystem,
            vcs,
            prompt: None,
            version_updater: None,
        }
    }

    /// Attach an interactive prompt used by [`Self::scaffold_prompt`].
    pub fn with_prompt(mut self, prompt: Box<dyn SpecPrompt>) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Attach a version updater used by [`Self::update_package_version`].
    pub fn with_version_updater(mut self, updater: Box<dyn VersionUpdater>) -> Self {
        self.version_updater = Some(updater);
        self
    }

    pub fn spec(&self) -> &PackageSpec {
        &self.spec
    }

    /// Everything `scaffold()` would write, without touching the filesystem.
    pub fn plan(&self) -> ScaffResult<ProjectStructure> {
        let structure = artifacts::package_structure(&self.spec);
        structure.validate().map_err(ScaffError::Domain)?;
        Ok(structure)
    }

    /// Run the entire scaffolding process.
    ///
    /// Returns the package root on success.
    #[instrument(
        skip_all,
        fields(
            package = %self.spec.name(),
            root = %self.spec.root().display()
        )
    )]
    pub fn scaffold(&self) -> ScaffResult<PathBuf> {
        let package_root = self.spec.package_root();

        if let Err(e) = self.filesystem.create_dir(&package_root) {
            if e.is_target_exists() {
                warn!(path = %package_root.display(), "Package root already exists");
            }
            return Err(e);
        }

        let source_dir = self.spec.source_dir();
        self.filesystem.create_dir_all(&source_dir)?;
        debug!(path = %source_dir.display(), "Source directory created");

        self.init_vcs(&package_root);

        self.render_readme()?;
        self.render_gitignore()?;
        self.render_manifest()?;
        self.render_source_stubs()?;

        info!(path = %package_root.display(), "Scaffold completed successfully");
        Ok(package_root)
    }

    /// Remove the package root recursively.
    ///
    /// A missing root is reported through [`CleanOutcome::Missing`], not an
    /// error, so `clean()` can always precede `scaffold()`.
    #[instrument(skip_all, fields(package = %self.spec.name()))]
    pub fn clean(&self) -> ScaffResult<CleanOutcome> {
        let package_root = self.spec.package_root();

        if !self.filesystem.exists(&package_root) {
            warn!(path = %package_root.display(), "Cannot clean: path nonexistent");
            return Ok(CleanOutcome::Missing(package_root));
        }

        self.filesystem.remove_dir_all(&package_root)?;
        info!(path = %package_root.display(), "Package removed");
        Ok(CleanOutcome::Removed(package_root))
    }

    /// Write `README.md`.
    pub fn render_readme(&self) -> ScaffResult<PathBuf> {
        self.write(&artifacts::readme(&self.spec))
    }

    /// Write `.gitignore`.
    pub fn render_gitignore(&self) -> ScaffResult<PathBuf> {
        self.write(&artifacts::gitignore(&self.spec))
    }

    /// Write `setup.py`.
    pub fn render_manifest(&self) -> ScaffResult<PathBuf> {
        self.write(&artifacts::manifest(&self.spec))
    }

    /// Write `__init__.py`, `__main__.py`, and the placeholder class file.
    pub fn render_source_stubs(&self) -> ScaffResult<Vec<PathBuf>> {
        artifacts::source_stubs(&self.spec)
            .iter()
            .map(|file| self.write(file))
            .collect()
    }

    /// Ask the attached [`SpecPrompt`] for updated package metadata.
    pub fn scaffold_prompt(&self) -> ScaffResult<PackageSpec> {
        let prompt = self
            .prompt
            .as_ref()
            .ok_or(ApplicationError::AdapterNotConfigured { name: "SpecPrompt" })?;
        prompt.prompt(&self.spec)
    }

    /// Bump the version in the generated `setup.py` through the attached
    /// [`VersionUpdater`].
    pub fn update_package_version(&self) -> ScaffResult<String> {
        let updater =
            self.version_updater
                .as_ref()
                .ok_or(ApplicationError::AdapterNotConfigured {
                    name: "VersionUpdater",
                })?;
        let manifest = self.spec.package_root().join(artifacts::MANIFEST_FILE);
        updater.update_version(&manifest, &self.spec)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write(&self, file: &FileToWrite) -> ScaffResult<PathBuf> {
        let path = self.spec.package_root().join(&file.path);
        self.filesystem.write_file(&path, &file.content)?;
        debug!(path = %path.display(), bytes = file.size(), "File written");
        Ok(path)
    }

    fn init_vcs(&self, package_root: &Path) {
        match self.vcs.init(package_root) {
            Ok(()) => debug!(tool = self.vcs.name(), "Repository initialised"),
            Err(e) => warn!(
                tool = self.vcs.name(),
                error = %e,
                "Repository initialisation failed, continuing"
            ),
        }
    }
}
