//! Flags shared by every pyscaff subcommand.
//!
//! Flattened into [`super::Cli`]; each flag is `global` so it may appear
//! before or after the subcommand name.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Diagnostic detail on stderr, counted (`-vv`).
    ///
    /// Generated files and stdout are unaffected. `RUST_LOG` wins when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more on stderr (-v, -vv, -vvv)",
        long_help = "Raise the stderr log level while scaffolding:
    (none)  - warnings, e.g. a failed `git init`
    -v      - one line per finished new or clean
    -vv     - every file and directory written
    -vvv    - adapter calls as well
RUST_LOG overrides this flag when set."
    )]
    pub verbose: u8,

    /// Hide progress lines and the file tree. Errors still reach stderr.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing but errors"
    )]
    pub quiet: bool,

    /// Plain status markers and trees.
    ///
    /// Also set by `NO_COLOR=1` or `output.no_color = true` in the config.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Print without ANSI colors"
    )]
    pub no_color: bool,

    /// TOML file to read defaults from; must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the user config"
    )]
    pub config: Option<PathBuf>,

    /// Rendering of command results on stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to print results (json prints the plan or result as data)"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from the config, else human on a TTY and plain when piped.
    #[default]
    Auto,
    /// Colored markers and a directory tree.
    Human,
    /// The same lines with no escape codes.
    Plain,
    /// One pretty-printed JSON document.
    Json,
}
