//! Integration tests for the `pyscaff` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config and environment.
fn pyscaff(temp: &TempDir) -> Command {
    let config = temp.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "[scaffold]\ninit_git = false\n").unwrap();
    }
    let mut cmd = cargo::cargo_bin_cmd!("pyscaff");
    cmd.current_dir(temp.path())
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .arg("--config")
        .arg(&config);
    cmd
}

fn workspace(temp: &TempDir) -> PathBuf {
    let dir = temp.path().join("work");
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn new_package(temp: &TempDir, root: &Path) -> assert_cmd::assert::Assert {
    pyscaff(temp)
        .args(["new", "test_package", "-d", "This is a test package!", "--root"])
        .arg(root)
        .assert()
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    pyscaff(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("clean"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    pyscaff(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_without_description_is_usage_error() {
    let temp = TempDir::new().unwrap();
    pyscaff(&temp).args(["new", "pkg"]).assert().code(2);
}

#[test]
fn new_creates_package_tree() {
    let temp = TempDir::new().unwrap();
    let root = workspace(&temp);

    new_package(&temp, &root)
        .success()
        .stdout(predicate::str::contains("__main__.py"));

    let pkg = root.join("test_package");
    for file in [
        "README.md",
        ".gitignore",
        "setup.py",
        "test_package/__init__.py",
        "test_package/__main__.py",
        "test_package/TestPackage.py",
    ] {
        assert!(pkg.join(file).is_file(), "missing {file}");
    }
    assert!(!pkg.join(".git").exists(), "init_git = false in config");

    let setup = fs::read_to_string(pkg.join("setup.py")).unwrap();
    assert!(setup.contains("version='0.0.1'"));
    assert!(setup.contains("'test-package=test_package.__main__:main'"));

    let main = fs::read_to_string(pkg.join("test_package/__main__.py")).unwrap();
    assert!(main.starts_with("#!/usr/bin/python\n"));
}

#[test]
fn metadata_flags_reach_generated_files() {
    let temp = TempDir::new().unwrap();
    let root = workspace(&temp);

    pyscaff(&temp)
        .args(["new", "report_tool", "-d", "Builds reports", "--git-account", "acme"])
        .args(["--author", "Ada Lovelace", "--python-version", "3.11", "--root"])
        .arg(&root)
        .assert()
        .success();

    let pkg = root.join("report_tool");
    let readme = fs::read_to_string(pkg.join("README.md")).unwrap();
    assert!(readme.contains("github.com/acme/report_tool.git"));
    assert!(readme.contains("Python >= 3.11"));
    let setup = fs::read_to_string(pkg.join("setup.py")).unwrap();
    assert!(setup.contains("author='Ada Lovelace'"));
}

#[test]
fn second_new_fails_and_leaves_files_alone() {
    let temp = TempDir::new().unwrap();
    let root = workspace(&temp);
    new_package(&temp, &root).success();

    let readme = root.join("test_package/README.md");
    fs::write(&readme, "edited").unwrap();

    new_package(&temp, &root)
        .code(2)
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&readme).unwrap(), "edited");
}

#[test]
fn clean_removes_package_then_warns_when_missing() {
    let temp = TempDir::new().unwrap();
    let root = workspace(&temp);
    new_package(&temp, &root).success();

    pyscaff(&temp)
        .args(["clean", "test_package", "--root"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));
    assert!(!root.join("test_package").exists());

    pyscaff(&temp)
        .args(["clean", "test_package", "--root"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean"));

    new_package(&temp, &root).success();
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = workspace(&temp);

    pyscaff(&temp)
        .args(["new", "test_package", "-d", "desc", "--dry-run", "--root"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("setup.py"));

    assert!(!root.join("test_package").exists());
}

#[test]
fn dry_run_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    let root = workspace(&temp);

    let assert = pyscaff(&temp)
        .args(["--output-format", "json", "new", "test_package", "-d", "desc", "--dry-run"])
        .arg("--root")
        .arg(&root)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let plan: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = plan["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["kind"], "directory");
}

#[test]
fn invalid_name_is_rejected() {
    let temp = TempDir::new().unwrap();
    pyscaff(&temp)
        .args(["new", ".hidden", "-d", "desc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid package name"));
}

#[test]
fn hyphenated_name_is_rejected_before_writing() {
    let temp = TempDir::new().unwrap();
    let root = workspace(&temp);
    pyscaff(&temp)
        .args(["new", "my-tool", "-d", "desc", "--root"])
        .arg(&root)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Python identifier"));
    assert!(!root.join("my-tool").exists());
}

#[test]
fn config_set_then_get() {
    let temp = TempDir::new().unwrap();

    pyscaff(&temp)
        .args(["config", "set", "package.git_account", "acme"])
        .assert()
        .success();

    pyscaff(&temp)
        .args(["config", "get", "package.git_account"])
        .assert()
        .success()
        .stdout(predicate::str::diff("acme\n"));

    // The earlier scaffold.init_git entry survives the edit.
    pyscaff(&temp)
        .args(["config", "get", "scaffold.init_git"])
        .assert()
        .success()
        .stdout(predicate::str::diff("false\n"));
}

#[test]
fn config_get_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    pyscaff(&temp)
        .args(["config", "get", "nope.nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn env_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    pyscaff(&temp)
        .env("PYSCAFF_PACKAGE__AUTHOR", "From Env")
        .args(["config", "get", "package.author"])
        .assert()
        .success()
        .stdout(predicate::str::diff("From Env\n"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    pyscaff(&temp).arg("init").assert().code(2);
    pyscaff(&temp).args(["init", "--force"]).assert().success();

    let written = fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(written.contains("[package]"));
    assert!(written.contains("init_git = true"));
}

#[test]
fn completions_bash() {
    let temp = TempDir::new().unwrap();
    pyscaff(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pyscaff"));
}
