//! `pyscaff config`: read and write configuration values.
//!
//! `set` edits the TOML file in place, keeping keys it does not touch.

use std::path::{Path, PathBuf};

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Every key `get` and `set` understand.
pub const KEYS: &[&str] = &[
    "package.author",
    "package.email",
    "package.git_account",
    "package.runtime_version",
    "package.license",
    "scaffold.root",
    "scaffold.init_git",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    path: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let config_path = path.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&config_path, &key, &value)?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.json(&config)?;
            } else {
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.header("Current Configuration:")?;
                output.print(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            output.print(&config_path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let package = &config.package;
    let value = match key {
        "package.author" => package.author.clone(),
        "package.email" => package.email.clone(),
        "package.git_account" => package.git_account.clone(),
        "package.runtime_version" => package.runtime_version.clone(),
        "package.license" => package.license.clone(),
        "scaffold.root" => config
            .scaffold
            .root
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        "scaffold.init_git" => config.scaffold.init_git.to_string(),
        "output.no_color" => config.output.no_color.to_string(),
        "output.format" => config.output.format.clone(),
        _ => return Err(CliError::UnknownConfigKey { key: key.into() }),
    };
    Ok(value)
}

fn set_config_value(path: &Path, key: &str, value: &str) -> CliResult<()> {
    let mut table = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str::<toml::Table>(&content).map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        toml::Table::new()
    };

    set_in_table(&mut table, key, value)?;

    // Reject anything the loader would not accept later.
    let serialised = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    toml::from_str::<AppConfig>(&serialised).map_err(|e| CliError::ConfigError {
        message: format!("Resulting configuration is invalid: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, serialised)
        .with_cli_context(|| format!("Failed to write '{}'", path.display()))
}

fn set_in_table(table: &mut toml::Table, key: &str, value: &str) -> CliResult<()> {
    let (section, field) = match key.split_once('.') {
        Some(parts) if KEYS.contains(&key) => parts,
        _ => return Err(CliError::UnknownConfigKey { key: key.into() }),
    };

    let parsed = match key {
        "scaffold.init_git" | "output.no_color" => {
            toml::Value::Boolean(value.parse().map_err(|_| CliError::InvalidInput {
                message: format!("'{key}' expects true or false, got '{value}'"),
            })?)
        }
        _ => toml::Value::String(value.to_string()),
    };

    let entry = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    match entry.as_table_mut() {
        Some(section_table) => {
            section_table.insert(field.to_string(), parsed);
            Ok(())
        }
        None => Err(CliError::ConfigError {
            message: format!("'{section}' in the config file is not a table"),
            source: None,
        }),
    }
}
