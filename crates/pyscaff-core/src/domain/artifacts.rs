//! Artifact renderers.
//!
//! Each renderer turns a [`PackageSpec`] into one or more files whose paths
//! are relative to the package root (`<root>/<name>`). Renderers are pure;
//! writing is the scaffolder's job.
//!
//! | Renderer         | Files                                                   |
//! |------------------|---------------------------------------------------------|
//! | [`readme`]       | `README.md`                                             |
//! | [`gitignore`]    | `.gitignore`                                            |
//! | [`manifest`]     | `setup.py`                                              |
//! | [`source_stubs`] | `<name>/__init__.py`, `<name>/__main__.py`, `<name>/<Class>.py` |

use std::path::PathBuf;

use crate::domain::{
    package_spec::PackageSpec,
    project_structure::{FileToWrite, ProjectStructure},
    text::{escape_docstring, escape_double_quoted, escape_single_quoted, trim_lines, word_wrap},
};

/// Column at which the description is wrapped in prose outputs.
pub const DESCRIPTION_WIDTH: usize = 80;

/// Version literal written into every new manifest.
pub const INITIAL_VERSION: &str = "0.0.1";

pub const README_FILE: &str = "README.md";
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const MANIFEST_FILE: &str = "setup.py";
pub const INIT_FILE: &str = "__init__.py";
pub const MAIN_FILE: &str = "__main__.py";

const IGNORE_PATTERNS: &[&str] = &[
    "*.swp",
    ".*.swp",
    "__pycache__/",
    "dist/",
    "*.egg-info/",
    "eggs/",
    ".eggs/",
    "build/",
];

/// `README.md`: title, description, installation, usage, local run.
pub fn readme(spec: &PackageSpec) -> FileToWrite {
    let name = spec.name();
    let account = spec.git_account();
    let content = trim_lines(&format!(
        "
        # {name} #
        {description}


        ## installation ##
        Requires `Python >= {version}`.
        Use `pip` to install directly from github:
        ```bash
        $ python -m pip install git+https://github.com/{account}/{name}.git
        ```
        This will expose the command `{command}`. See below for usage.

        ### from source ###
        To install from source, simply `clone` the repo, `cd` into it, and run the
        `setup.py` install script.
        ```bash
        $ git clone https://github.com/{account}/{name}.git
        $ cd {name}
        $ python setup.py install
        ```


        ## usage ##
        ```bash
        ```


        ## running locally ##
        To test the module locally without installing, `cd` into the project
        root and type `python -m {name}`. This will run the modules
        entry point, which happens to be a CLI.
        ",
        description = word_wrap(spec.description(), DESCRIPTION_WIDTH),
        version = spec.runtime_version(),
        command = spec.command_name(),
    ));

    FileToWrite::new(README_FILE, with_newline(content))
}

/// `.gitignore`: editor swap files, bytecode caches, build artifacts.
pub fn gitignore(_spec: &PackageSpec) -> FileToWrite {
    FileToWrite::new(GITIGNORE_FILE, with_newline(IGNORE_PATTERNS.join("\n")))
}

/// `setup.py` with a console entry point `<command>=<name>.__main__:main`.
pub fn manifest(spec: &PackageSpec) -> FileToWrite {
    let name = spec.name();
    let content = format!(
        r#"#!/usr/bin/python
from setuptools import setup, find_packages

setup(name='{name}',
      version='{INITIAL_VERSION}',
      description='{description}',
      url='{url}',
      author='{author}',
      author_email='{email}',
      license='{license}',
      python_requires=">={version}",
      packages=['{name}'],
      entry_points={{
          'console_scripts': [
              '{command}={name}.__main__:main'
          ]
      }},
      install_requires=[])
"#,
        description = escape_single_quoted(spec.description()),
        url = spec.repository_url(),
        author = escape_single_quoted(spec.author()),
        email = escape_single_quoted(spec.email()),
        license = escape_single_quoted(spec.license()),
        version = escape_double_quoted(spec.runtime_version()),
        command = spec.command_name(),
    );

    FileToWrite::new(MANIFEST_FILE, content)
}

/// Package marker, entry-point module, and placeholder class.
pub fn source_stubs(spec: &PackageSpec) -> Vec<FileToWrite> {
    let name = spec.name();
    let class = spec.class_name();
    let command = spec.command_name();
    let dir = PathBuf::from(name);

    let main = format!(
        r#"#!/usr/bin/python
"""{docstring}"""
import sys
import argparse

from {name}.{class} import {class}


def main():
    """Run CLI for {command}."""
    parser = argparse.ArgumentParser(
        prog="{command}",
        description="{description}"
    )

    args = parser.parse_args()


if __name__ == "__main__":
    # Use this entry point to test the package locally.
    main()
"#,
        docstring = escape_docstring(&word_wrap(spec.description(), DESCRIPTION_WIDTH)),
        description = escape_double_quoted(spec.description()),
    );

    let class_file = format!(
        r#"class {class}:
    """Enter class description."""
    pass
"#
    );

    vec![
        FileToWrite::new(dir.join(INIT_FILE), ""),
        FileToWrite::new(dir.join(MAIN_FILE), main),
        FileToWrite::new(dir.join(format!("{class}.py")), class_file),
    ]
}

/// The whole package layout, in the order the scaffolder writes it.
pub fn package_structure(spec: &PackageSpec) -> ProjectStructure {
    let mut structure = ProjectStructure::new(spec.package_root()).with_directory(spec.name());
    structure.add_file(readme(spec));
    structure.add_file(gitignore(spec));
    structure.add_file(manifest(spec));
    for stub in source_stubs(spec) {
        structure.add_file(stub);
    }
    structure
}

fn with_newline(mut content: String) -> String {
    content.push('\n');
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> PackageSpec {
        PackageSpec::builder()
            .name("test_package")
            .description("This is a test package!")
            .root("/tmp")
            .build()
            .unwrap()
    }

    #[test]
    fn readme_has_title_and_sections() {
        let readme = readme(&spec());
        assert_eq!(readme.path, PathBuf::from("README.md"));
        assert!(readme.content.starts_with("# test_package #\nThis is a test package!\n"));
        assert!(readme.content.contains("## installation ##"));
        assert!(readme.content.contains("Requires `Python >= 3.6`."));
        assert!(
            readme
                .content
                .contains("git+https://github.com/AnikaSystems/test_package.git")
        );
        assert!(readme.content.contains("the command `test-package`"));
        assert!(readme.content.contains("python -m test_package"));
    }

    #[test]
    fn readme_lines_have_no_indentation() {
        let readme = readme(&spec());
        assert!(readme.content.lines().all(|l| l == l.trim()));
    }

    #[test]
    fn readme_wraps_long_descriptions() {
        let long = "word ".repeat(60);
        let spec = PackageSpec::builder()
            .name("p")
            .description(long)
            .root(".")
            .build()
            .unwrap();
        let readme = readme(&spec);
        let description_lines: Vec<&str> = readme
            .content
            .lines()
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect();
        assert!(description_lines.len() > 1);
        assert!(description_lines.iter().all(|l| l.len() < DESCRIPTION_WIDTH));
    }

    #[test]
    fn gitignore_lists_patterns_one_per_line() {
        let ignore = gitignore(&spec());
        let lines: Vec<&str> = ignore.content.lines().collect();
        assert_eq!(lines, IGNORE_PATTERNS);
    }

    #[test]
    fn manifest_declares_entry_point() {
        let setup = manifest(&spec());
        assert!(setup.content.contains("setup(name='test_package',"));
        assert!(setup.content.contains("version='0.0.1',"));
        assert!(
            setup
                .content
                .contains("'test-package=test_package.__main__:main'")
        );
        assert!(setup.content.contains("python_requires=\">=3.6\","));
        assert!(
            setup
                .content
                .contains("url='https://github.com/AnikaSystems/test_package',")
        );
        assert!(setup.content.contains("entry_points={\n"));
    }

    #[test]
    fn manifest_escapes_quotes_in_description() {
        let spec = PackageSpec::builder()
            .name("p")
            .description("it's fine")
            .root(".")
            .build()
            .unwrap();
        assert!(manifest(&spec).content.contains("description='it\\'s fine',"));
    }

    #[test]
    fn multi_line_description_stays_on_one_literal_line() {
        let spec = PackageSpec::builder()
            .name("test_package")
            .description("line one\nline two\twith tab")
            .root(".")
            .build()
            .unwrap();

        let setup = manifest(&spec).content;
        assert!(setup.contains("      description='line one\\nline two\\twith tab',\n"));

        let main = &source_stubs(&spec)[1].content;
        assert!(main.contains("        description=\"line one\\nline two\\twith tab\"\n"));
        // The docstring is re-wrapped from whitespace-separated words.
        assert!(main.contains("\"\"\"line one line two with tab\"\"\"\n"));
        // Every `description=` assignment closes on the line it opens.
        for text in [&setup, main] {
            for line in text.lines().filter(|l| l.contains("description=")) {
                assert!(line.trim_end().ends_with(['\'', '"', ',']), "unterminated: {line}");
            }
        }
    }

    #[test]
    fn source_stubs_layout() {
        let stubs = source_stubs(&spec());
        let paths: Vec<PathBuf> = stubs.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("test_package/__init__.py"),
                PathBuf::from("test_package/__main__.py"),
                PathBuf::from("test_package/TestPackage.py"),
            ]
        );
        assert!(stubs[0].content.is_empty());
    }

    #[test]
    fn entry_point_builds_parser_without_arguments() {
        let stubs = source_stubs(&spec());
        let main = &stubs[1].content;
        assert!(main.starts_with("#!/usr/bin/python\n\"\"\"This is a test package!\"\"\"\n"));
        assert!(main.contains("from test_package.TestPackage import TestPackage"));
        assert!(main.contains("def main():\n"));
        assert!(main.contains("        prog=\"test-package\",\n"));
        assert!(main.contains("        description=\"This is a test package!\"\n"));
        assert!(main.contains("    args = parser.parse_args()\n"));
        assert!(!main.contains("add_argument"));
        assert!(main.contains("if __name__ == \"__main__\":\n"));
    }

    #[test]
    fn placeholder_class_is_empty() {
        let stubs = source_stubs(&spec());
        assert_eq!(
            stubs[2].content,
            "class TestPackage:\n    \"\"\"Enter class description.\"\"\"\n    pass\n"
        );
    }

    #[test]
    fn package_structure_is_valid_and_complete() {
        let structure = package_structure(&spec());
        assert!(structure.validate().is_ok());
        assert_eq!(structure.root(), PathBuf::from("/tmp/test_package"));
        assert_eq!(structure.files().count(), 6);
        assert_eq!(structure.directories().count(), 1);
        assert!(structure.file("setup.py").is_some());
        assert!(structure.file(".gitignore").is_some());
    }

    #[test]
    fn package_structure_serializes_for_dry_runs() {
        let json = serde_json::to_value(package_structure(&spec())).unwrap();
        assert_eq!(json["entries"][0]["kind"], "directory");
        assert_eq!(json["entries"][1]["path"], "README.md");
    }
}
