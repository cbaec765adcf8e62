//! Logging init: `uritools.log` in the application log dir, or stderr.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::dirs::AppDirs;

const DEFAULT_FILTER: &str = "info,uritools=debug,uritools_core=debug";
const LOG_FILE_NAME: &str = "uritools.log";

/// Initialize structured logging to `~/.local/state/uritools/logs/uritools.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    init_logging_in(&AppDirs::from_xdg()?)
}

/// Same as [`init_logging`] with an explicit directory layout.
pub fn init_logging_in(dirs: &AppDirs) -> Result<()> {
    let (file, log_file_path) = open_log_file(dirs)?;
    tracing::subscriber::set_global_default(file_subscriber(file, env_filter()))?;
    tracing::debug!("uritools logging initialized at {}", log_file_path.display());
    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

/// Open (append) the log file under `dirs.log`, creating the directory.
fn open_log_file(dirs: &AppDirs) -> Result<(File, PathBuf)> {
    fs::create_dir_all(&dirs.log)
        .with_context(|| format!("failed to create log dir: {}", dirs.log.display()))?;
    let path = dirs.log.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file: {}", path.display()))?;
    Ok((file, path))
}

fn file_subscriber(file: File, filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish()
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
