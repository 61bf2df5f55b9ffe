//! Implementation of the `pyscaff new` command.
//!
//! Translates CLI arguments into a `PackageSpec`, wires the local adapters
//! into a `Scaffolder`, and reports the result.

use tracing::{debug, info, instrument};

use pyscaff_adapters::{GitCli, LocalFilesystem, NoVcs};
use pyscaff_core::{
    application::{Scaffolder, ports::VersionControl},
    domain::{PackageSpec, ProjectStructure},
};

use crate::{
    cli::{NewArgs, OutputFormat},
    commands::slash_path,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `pyscaff new` command.
///
/// 1. Merge flags over config into a `PackageSpec`
/// 2. Early-exit with the plan if `--dry-run`
/// 3. Scaffold through `LocalFilesystem` and `GitCli` (or `NoVcs`)
/// 4. Print the created tree
#[instrument(skip_all, fields(package = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let spec = build_spec(&args, &config)?;
    debug!(%spec, "Package spec resolved");

    let vcs: Box<dyn VersionControl> = if args.no_git || !config.scaffold.init_git {
        Box::new(NoVcs)
    } else {
        Box::new(GitCli::new())
    };
    let filesystem = LocalFilesystem::new();
    let scaffolder = Scaffolder::new(spec, Box::new(filesystem), vcs);

    if args.dry_run {
        let plan = scaffolder.plan()?;
        return show_plan(&plan, &output);
    }

    output.header(&format!("Creating '{}'...", scaffolder.spec().name()))?;
    info!(path = %scaffolder.spec().package_root().display(), "Scaffold started");

    let root = scaffolder.scaffold()?;
    let entries: Vec<(String, bool)> = filesystem
        .list_tree(&root)?
        .into_iter()
        .map(|relative| {
            let is_dir = root.join(&relative).is_dir();
            (slash_path(&relative), is_dir)
        })
        .collect();

    if output.format() == OutputFormat::Json {
        output.json(&serde_json::json!({
            "root": root,
            "entries": entries
                .iter()
                .map(|(path, is_dir)| serde_json::json!({
                    "path": path,
                    "kind": if *is_dir { "directory" } else { "file" },
                }))
                .collect::<Vec<_>>(),
        }))?;
        return Ok(());
    }

    output.success(&format!(
        "Package '{}' created at {}",
        scaffolder.spec().name(),
        root.display()
    ))?;
    output.tree(&root, &entries)?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", root.display()))?;
    output.print(&format!("  python -m {}", scaffolder.spec().name()))?;

    Ok(())
}

/// Flags win over config; config wins over built-in defaults.
pub(crate) fn build_spec(args: &NewArgs, config: &AppConfig) -> CliResult<PackageSpec> {
    let meta = &args.metadata;
    let mut builder = PackageSpec::builder()
        .name(&args.name)
        .description(&args.description)
        .root(config.resolve_root(args.root.as_deref()))
        .defaults(config.package.clone());

    if let Some(author) = &meta.author {
        builder = builder.author(author);
    }
    if let Some(email) = &meta.email {
        builder = builder.email(email);
    }
    if let Some(account) = &meta.git_account {
        builder = builder.git_account(account);
    }
    if let Some(license) = &meta.license {
        builder = builder.license(license);
    }
    if let Some(version) = &meta.python_version {
        builder = builder.runtime_version(version);
    }

    builder.build().map_err(|e| CliError::Core(e.into()))
}

fn show_plan(plan: &ProjectStructure, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!("Dry run: would create {}", plan.root().display()))?;
    output.tree(plan.root(), &plan_entries(plan))?;
    Ok(())
}

fn plan_entries(plan: &ProjectStructure) -> Vec<(String, bool)> {
    let mut entries: Vec<(String, bool)> = plan
        .directories()
        .map(|d| (slash_path(&d.path), true))
        .chain(plan.files().map(|f| (slash_path(&f.path), false)))
        .collect();
    entries.sort();
    entries
}
