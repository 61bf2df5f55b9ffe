//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pyscaff",
    bin_name = "pyscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Boilerplate for Python command-line packages",
    long_about = "pyscaff generates the README, .gitignore, setup.py and source \
                  stubs for a new Python CLI package and initialises a git repository.",
    after_help = "EXAMPLES:\n\
        \x20 pyscaff new my_tool -d \"Does one thing well\"\n\
        \x20 pyscaff new my_tool -d \"Does one thing well\" --root ~/src --no-git\n\
        \x20 pyscaff clean my_tool --root ~/src\n\
        \x20 pyscaff completions bash > /usr/share/bash-completion/completions/pyscaff",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new package.
    #[command(
        visible_alias = "n",
        about = "Create a new package",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff new test_package -d \"This is a test package!\"\n\
            \x20 pyscaff new report_tool  -d \"Builds reports\" --git-account acme --license MIT\n\
            \x20 pyscaff new report_tool  -d \"Builds reports\" --dry-run --output-format json"
    )]
    New(NewArgs),

    /// Remove a previously generated package.
    #[command(
        about = "Remove a generated package directory",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff clean test_package\n\
            \x20 pyscaff clean test_package --root ~/src"
    )]
    Clean(CleanArgs),

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff init\n\
            \x20 pyscaff init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff completions bash > ~/.local/share/bash-completion/completions/pyscaff\n\
            \x20 pyscaff completions zsh  > ~/.zfunc/_pyscaff\n\
            \x20 pyscaff completions fish > ~/.config/fish/completions/pyscaff.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pyscaff config get package.author\n\
            \x20 pyscaff config set package.git_account acme\n\
            \x20 pyscaff config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `pyscaff new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Package name; also the module name. Underscores become hyphens in the
    /// console command.
    #[arg(value_name = "NAME", help = "Package name (e.g. my_tool)")]
    pub name: String,

    /// Free-text description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Package description"
    )]
    pub description: String,

    /// Directory in which `<NAME>/` is created.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Parent directory (default: config scaffold.root, else current directory)"
    )]
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub metadata: MetadataArgs,

    /// Skip `git init`.
    #[arg(long = "no-git", help = "Do not initialise a git repository")]
    pub no_git: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Overrides for the author/publishing defaults.
#[derive(Debug, Default, Args)]
pub struct MetadataArgs {
    #[arg(long = "author", value_name = "NAME", help = "Author name")]
    pub author: Option<String>,

    #[arg(long = "email", value_name = "EMAIL", help = "Author email")]
    pub email: Option<String>,

    #[arg(
        long = "git-account",
        value_name = "ACCOUNT",
        help = "GitHub account hosting the repository"
    )]
    pub git_account: Option<String>,

    #[arg(long = "license", value_name = "LICENSE", help = "License string")]
    pub license: Option<String>,

    #[arg(
        long = "python-version",
        value_name = "VERSION",
        help = "Minimum Python version"
    )]
    pub python_version: Option<String>,
}

// ── clean ─────────────────────────────────────────────────────────────────────

/// Arguments for `pyscaff clean`.
#[derive(Debug, Args)]
pub struct CleanArgs {
    #[arg(value_name = "NAME", help = "Package name")]
    pub name: String,

    #[arg(short = 'r', long = "root", value_name = "DIR", help = "Parent directory")]
    pub root: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pyscaff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pyscaff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pyscaff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `package.author`.
        key: String,
    },
    /// Set a configuration key in the config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
