//! End-to-end scaffolding against the real adapters.

use std::path::{Path, PathBuf};

use pyscaff_adapters::{LocalFilesystem, MemoryFilesystem, NoVcs};
use pyscaff_core::{
    application::{CleanOutcome, Scaffolder, ports::Filesystem},
    domain::PackageSpec,
    error::ScaffResult,
};

fn spec(root: impl Into<PathBuf>) -> PackageSpec {
    PackageSpec::builder()
        .name("test_package")
        .description("This is a test package!")
        .root(root)
        .build()
        .unwrap()
}

fn expected_tree() -> Vec<PathBuf> {
    let mut tree: Vec<PathBuf> = [
        ".gitignore",
        "README.md",
        "setup.py",
        "test_package",
        "test_package/TestPackage.py",
        "test_package/__init__.py",
        "test_package/__main__.py",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    tree.sort();
    tree
}

fn memory_scaffolder(fs: &MemoryFilesystem) -> Scaffolder {
    fs.create_dir_all(Path::new("/home/user")).unwrap();
    Scaffolder::new(spec("/home/user"), Box::new(fs.clone()), Box::new(NoVcs))
}

// ── in-memory ─────────────────────────────────────────────────────────────────

#[test]
fn scaffold_creates_tree() {
    let fs = MemoryFilesystem::new();
    let scaffolder = memory_scaffolder(&fs);

    let root = scaffolder.scaffold().unwrap();

    assert_eq!(root, PathBuf::from("/home/user/test_package"));
    assert_eq!(fs.list_tree(&root), expected_tree());

    let setup = fs.read_file(&root.join("setup.py")).unwrap();
    assert!(setup.contains("test_package"));
    assert!(setup.contains("'test-package=test_package.__main__:main'"));
    assert_eq!(
        fs.read_file(&root.join("test_package/__init__.py")).unwrap(),
        ""
    );
}

#[test]
fn second_scaffold_reports_target_exists_and_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let scaffolder = memory_scaffolder(&fs);
    let root = scaffolder.scaffold().unwrap();

    // Tamper with a file so an overwrite would be visible.
    fs.write_file(&root.join("README.md"), "edited").unwrap();

    let err = scaffolder.scaffold().unwrap_err();
    assert!(err.is_target_exists());
    assert_eq!(fs.read_file(&root.join("README.md")).unwrap(), "edited");
    assert_eq!(fs.list_tree(&root), expected_tree());
}

#[test]
fn clean_then_scaffold_reproduces_identical_tree() {
    let fs = MemoryFilesystem::new();
    let scaffolder = memory_scaffolder(&fs);
    let root = scaffolder.scaffold().unwrap();
    let before: Vec<(PathBuf, Option<String>)> = fs
        .list_tree(&root)
        .into_iter()
        .map(|p| {
            let content = fs.read_file(&root.join(&p));
            (p, content)
        })
        .collect();

    assert_eq!(scaffolder.clean().unwrap(), CleanOutcome::Removed(root.clone()));
    assert!(!fs.exists(&root));

    scaffolder.scaffold().unwrap();
    let after: Vec<(PathBuf, Option<String>)> = fs
        .list_tree(&root)
        .into_iter()
        .map(|p| {
            let content = fs.read_file(&root.join(&p));
            (p, content)
        })
        .collect();

    assert_eq!(before, after);
}

#[test]
fn clean_missing_path_is_a_no_op() {
    let fs = MemoryFilesystem::new();
    let scaffolder = memory_scaffolder(&fs);
    assert_eq!(
        scaffolder.clean().unwrap(),
        CleanOutcome::Missing(PathBuf::from("/home/user/test_package"))
    );
    // Twice in a row is fine too.
    assert!(matches!(
        scaffolder.clean().unwrap(),
        CleanOutcome::Missing(_)
    ));
}

#[test]
fn missing_root_parent_is_a_filesystem_error() {
    let fs = MemoryFilesystem::new();
    let scaffolder = Scaffolder::new(spec("/nowhere"), Box::new(fs.clone()), Box::new(NoVcs));
    let err = scaffolder.scaffold().unwrap_err();
    assert!(!err.is_target_exists());
    assert!(fs.list_tree(Path::new("/")).is_empty());
}

/// Creates the nested source directory the moment the package root appears,
/// as a concurrent writer would.
struct RacingFilesystem {
    inner: MemoryFilesystem,
}

impl Filesystem for RacingFilesystem {
    fn create_dir(&self, path: &Path) -> ScaffResult<()> {
        self.inner.create_dir(path)?;
        self.inner.create_dir(&path.join("test_package"))
    }

    fn create_dir_all(&self, path: &Path) -> ScaffResult<()> {
        self.inner.create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffResult<()> {
        self.inner.write_file(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn remove_dir_all(&self, path: &Path) -> ScaffResult<()> {
        self.inner.remove_dir_all(path)
    }
}

#[test]
fn preexisting_source_directory_is_tolerated() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/home/user")).unwrap();
    let racing = RacingFilesystem { inner: fs.clone() };
    let scaffolder = Scaffolder::new(spec("/home/user"), Box::new(racing), Box::new(NoVcs));

    let root = scaffolder.scaffold().unwrap();
    assert_eq!(fs.list_tree(&root), expected_tree());
}

// ── local disk ────────────────────────────────────────────────────────────────

#[test]
fn local_scaffold_clean_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    let fs = LocalFilesystem::new();
    let scaffolder = Scaffolder::new(spec(temp.path()), Box::new(fs), Box::new(NoVcs));

    let root = scaffolder.scaffold().unwrap();
    assert_eq!(fs.list_tree(&root).unwrap(), expected_tree());
    let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# test_package #"));

    assert!(scaffolder.scaffold().unwrap_err().is_target_exists());

    assert!(matches!(scaffolder.clean().unwrap(), CleanOutcome::Removed(_)));
    assert!(!root.exists());
    assert!(matches!(scaffolder.clean().unwrap(), CleanOutcome::Missing(_)));

    scaffolder.scaffold().unwrap();
    assert_eq!(fs.list_tree(&root).unwrap(), expected_tree());
}
