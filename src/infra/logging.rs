use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

const LOG_FILE_NAME: &str = "cipherteams.log";

/// Installs a file-backed subscriber so log lines never land on the TUI screen.
///
/// The returned guard flushes buffered lines when dropped and must outlive the app.
pub fn init(config: &LogConfig, directory: &Path) -> Result<WorkerGuard, AppError> {
    fs::create_dir_all(directory).map_err(|source| AppError::StorageDirCreate {
        path: directory.to_path_buf(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(directory, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

/// Picks the log directory. The storage layout is only resolved when the config
/// does not name a directory.
pub fn resolve_log_dir(config: &LogConfig) -> Result<PathBuf, AppError> {
    resolve_log_dir_with(config, StorageLayout::resolve)
}

fn resolve_log_dir_with<F>(config: &LogConfig, resolve_layout: F) -> Result<PathBuf, AppError>
where
    F: FnOnce() -> Result<StorageLayout, AppError>,
{
    if let Some(directory) = &config.directory {
        return Ok(directory.clone());
    }

    let layout = resolve_layout()?;
    layout.ensure_dirs()?;
    Ok(layout.log_dir)
}
