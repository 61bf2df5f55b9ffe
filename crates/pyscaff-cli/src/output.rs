//! Terminal output for command results.
//!
//! Everything a command shows the user goes through [`OutputManager`];
//! diagnostics go through `tracing` to stderr instead.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Style {
    Plain,
    Success,
    Warning,
    Info,
    Header,
}

/// Writes command results to stdout in the resolved format.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `Auto` resolves to the config's `output.format` when that names a
    /// concrete format, else to `Human` on a TTY and `Plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = match args.output_format {
            OutputFormat::Auto => match config.output.format.as_str() {
                "human" => OutputFormat::Human,
                "plain" => OutputFormat::Plain,
                "json" => OutputFormat::Json,
                _ if io::stdout().is_terminal() => OutputFormat::Human,
                _ => OutputFormat::Plain,
            },
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(self.line(Style::Plain, msg))
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(self.line(Style::Success, msg))
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(self.line(Style::Warning, msg))
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(self.line(Style::Info, msg))
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(self.line(Style::Header, text))
    }

    /// The rendered line for `msg`, or `None` in quiet mode.
    fn line(&self, style: Style, msg: &str) -> Option<String> {
        if self.quiet {
            return None;
        }
        let line = match (style, self.no_color) {
            (Style::Plain, _) => msg.to_owned(),
            (Style::Success, true) => format!("\u{2713} {msg}"),
            (Style::Success, false) => format!("{} {}", "\u{2713}".green().bold(), msg.green()),
            (Style::Warning, true) => format!("\u{26a0} {msg}"),
            (Style::Warning, false) => format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow()),
            (Style::Info, true) => format!("\u{2139} {msg}"),
            (Style::Info, false) => format!("{} {}", "\u{2139}".blue().bold(), msg.blue()),
            (Style::Header, true) => msg.to_owned(),
            (Style::Header, false) => msg.cyan().bold().to_string(),
        };
        Some(line)
    }

    fn emit(&self, line: Option<String>) -> io::Result<()> {
        match line {
            Some(line) => self.term.write_line(&line),
            None => Ok(()),
        }
    }

    /// Print a relative path list as an indented tree, one entry per line.
    ///
    /// Directories get a trailing `/`.
    pub fn tree(&self, root: &Path, entries: &[(String, bool)]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&format!("{}/", root.display()))?;
        for (path, is_dir) in entries {
            let depth = path.matches('/').count() + 1;
            let name = path.rsplit('/').next().unwrap_or(path);
            let suffix = if *is_dir { "/" } else { "" };
            let label = format!("{name}{suffix}");
            let label = if self.no_color || !is_dir {
                label
            } else {
                label.blue().bold().to_string()
            };
            self.term
                .write_line(&format!("{}{label}", "  ".repeat(depth)))?;
        }
        Ok(())
    }

    /// Emit `value` as pretty JSON. Never suppressed: JSON output is data.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}
