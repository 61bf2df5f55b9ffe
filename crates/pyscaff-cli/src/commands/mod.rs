//! Command handlers, one module per subcommand.
//!
//! Each handler receives parsed arguments plus the loaded [`AppConfig`] and
//! returns [`CliResult`]. Handlers wire adapters into the core services and
//! report through [`OutputManager`]; they hold no scaffolding logic.
//!
//! [`AppConfig`]: crate::config::AppConfig
//! [`CliResult`]: crate::error::CliResult
//! [`OutputManager`]: crate::output::OutputManager

pub mod clean;
pub mod completions;
pub mod config;
pub mod init;
pub mod new;

use std::path::Path;

/// Render a relative path with `/` separators on every platform.
pub(crate) fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
