use consultant_directory::config::{AppConfig, DirectoryConfig};
use consultant_directory::directory::seed;
use consultant_directory::directory::{DirectoryEntry, DirectoryImporter, DirectoryService};
use consultant_directory::error::AppError;
use consultant_directory::telemetry;
use std::path::Path;
use tracing::info;

/// Everything a command needs: configuration plus a loaded directory.
pub(crate) struct CliContext {
    pub(crate) config: DirectoryConfig,
    pub(crate) service: DirectoryService,
}

pub(crate) fn bootstrap() -> Result<CliContext, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;

    let service = DirectoryService::new(&config.directory);
    let entries = load_entries(config.directory.source.as_deref())?;
    let generation = service.load(entries)?;

    info!(
        ?config.environment,
        generation,
        vocabulary = service.vocabulary().len(),
        "consultant directory ready"
    );

    Ok(CliContext {
        config: config.directory,
        service,
    })
}

pub(crate) fn load_entries(source: Option<&Path>) -> Result<Vec<DirectoryEntry>, AppError> {
    match source {
        Some(path) => {
            info!(path = %path.display(), "importing directory export");
            Ok(DirectoryImporter::from_path(path)?)
        }
        None => Ok(seed::sample_entries()),
    }
}

/// Replaces the loaded directory with an export named on the command line.
pub(crate) fn reload_from(context: &CliContext, path: &Path) -> Result<(), AppError> {
    let entries = load_entries(Some(path))?;
    context.service.load(entries)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_context() -> CliContext {
    let config = DirectoryConfig::default();
    let service = DirectoryService::new(&config);
    service
        .load(seed::sample_entries())
        .expect("seed directory loads");
    CliContext { config, service }
}
