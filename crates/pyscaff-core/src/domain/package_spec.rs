//! Package metadata.
//!
//! [`PackageSpec`] is the only entity in the domain: everything the renderers
//! emit is derived from it. It is immutable after [`PackageSpecBuilder::build`].

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, text};

/// Author and publishing details shared by every package a user generates.
///
/// Defaults reproduce the values the generator has always shipped with; the
/// CLI overrides them from the config file, environment, or flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDefaults {
    pub author: String,
    pub email: String,
    pub git_account: String,
    pub runtime_version: String,
    pub license: String,
}

impl Default for PackageDefaults {
    fn default() -> Self {
        Self {
            author: "Daniel Velez".into(),
            email: "daniel.enr.velez@gmail.com".into(),
            git_account: "AnikaSystems".into(),
            runtime_version: "3.6".into(),
            license: "Copyright Anikasystems".into(),
        }
    }
}

/// Immutable description of the package to scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    name: String,
    description: String,
    root: PathBuf,
    defaults: PackageDefaults,
}

impl PackageSpec {
    pub fn builder() -> PackageSpecBuilder {
        PackageSpecBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Directory in which `<name>/` is created.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn author(&self) -> &str {
        &self.defaults.author
    }

    pub fn email(&self) -> &str {
        &self.defaults.email
    }

    pub fn git_account(&self) -> &str {
        &self.defaults.git_account
    }

    pub fn runtime_version(&self) -> &str {
        &self.defaults.runtime_version
    }

    pub fn license(&self) -> &str {
        &self.defaults.license
    }

    pub fn defaults(&self) -> &PackageDefaults {
        &self.defaults
    }

    /// Console command exposed by the generated package (`my_tool` → `my-tool`).
    pub fn command_name(&self) -> String {
        self.name.replace('_', "-")
    }

    /// Name of the generated placeholder class (`my_tool` → `MyTool`).
    pub fn class_name(&self) -> String {
        text::underscore_to_camelcase(&self.name)
    }

    /// `<root>/<name>`
    pub fn package_root(&self) -> PathBuf {
        self.root.join(&self.name)
    }

    /// `<root>/<name>/<name>`
    pub fn source_dir(&self) -> PathBuf {
        self.package_root().join(&self.name)
    }

    /// `https://github.com/<account>/<name>`
    pub fn repository_url(&self) -> String {
        format!(
            "https://github.com/{}/{}",
            self.defaults.git_account, self.name
        )
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.package_root().display())
    }
}

/// Builder for [`PackageSpec`].
///
/// `name`, `description`, and `root` are required; every other field falls
/// back to [`PackageDefaults::default`].
#[derive(Debug, Default, Clone)]
pub struct PackageSpecBuilder {
    name: Option<String>,
    description: Option<String>,
    root: Option<PathBuf>,
    defaults: PackageDefaults,
}

impl PackageSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Replace all author/publishing fields at once.
    pub fn defaults(mut self, defaults: PackageDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.defaults.author = author.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.defaults.email = email.into();
        self
    }

    pub fn git_account(mut self, account: impl Into<String>) -> Self {
        self.defaults.git_account = account.into();
        self
    }

    pub fn runtime_version(mut self, version: impl Into<String>) -> Self {
        self.defaults.runtime_version = version.into();
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.defaults.license = license.into();
        self
    }

    pub fn build(self) -> Result<PackageSpec, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        let description = self
            .description
            .ok_or(DomainError::MissingRequiredField {
                field: "description",
            })?;
        let root = self
            .root
            .ok_or(DomainError::MissingRequiredField { field: "root" })?;

        validate_name(&name)?;

        Ok(PackageSpec {
            name,
            description,
            root,
            defaults: self.defaults,
        })
    }
}

/// The name doubles as a directory name and a Python module name.
fn validate_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidPackageName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(invalid("name cannot contain whitespace"));
    }
    if !is_identifier(name) {
        return Err(invalid(
            "name must be a Python identifier (letters, digits, underscores; no leading digit)",
        ));
    }
    if PYTHON_KEYWORDS.contains(&name) {
        return Err(invalid("name is a reserved Python keyword"));
    }
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid("name needs at least one letter or digit"));
    }
    Ok(())
}

/// `[A-Za-z_][A-Za-z0-9_]*`. The name is imported as a module.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];
