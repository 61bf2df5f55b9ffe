//! `pyscaff clean`: remove a generated package directory.

use tracing::instrument;

use pyscaff_adapters::{LocalFilesystem, NoVcs};
use pyscaff_core::{
    application::{CleanOutcome, Scaffolder},
    domain::PackageSpec,
};

use crate::{
    cli::CleanArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Remove `<root>/<name>` recursively. A missing directory is a warning, not
/// a failure.
#[instrument(skip_all, fields(package = %args.name))]
pub fn execute(args: CleanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // Only the name and root matter for cleaning; the description is inert.
    let spec = PackageSpec::builder()
        .name(&args.name)
        .description("")
        .root(config.resolve_root(args.root.as_deref()))
        .build()
        .map_err(|e| CliError::Core(e.into()))?;

    let scaffolder = Scaffolder::new(spec, Box::new(LocalFilesystem::new()), Box::new(NoVcs));

    match scaffolder.clean()? {
        CleanOutcome::Removed(path) => {
            output.success(&format!("Removed {}", path.display()))?;
        }
        CleanOutcome::Missing(path) => {
            output.warning(&format!("Nothing to clean: {} does not exist", path.display()))?;
        }
    }

    Ok(())
}
