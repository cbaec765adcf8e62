//! `uritools cache-path` and `uritools store` – URI-keyed cache entries.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use uritools_core::config::UritoolsConfig;
use uritools_core::dirs::AppDirs;
use uritools_core::{read_binary_file, write_binary_file};

pub fn run_cache_path(cfg: &UritoolsConfig, uri: &str) -> Result<()> {
    let dirs = AppDirs::from_xdg()?;
    println!("{}", dirs.cache_path_for_uri(uri, cfg.subpath_limit()).display());
    Ok(())
}

pub fn run_store(cfg: &UritoolsConfig, uri: &str, file: &Path) -> Result<()> {
    let dirs = AppDirs::from_xdg()?;
    let dest = store_into(&dirs, cfg, uri, file)?;
    println!("{}", dest.display());
    Ok(())
}

/// Copy `file` to the cache entry for `uri`; returns the entry path.
pub(crate) fn store_into(
    dirs: &AppDirs,
    cfg: &UritoolsConfig,
    uri: &str,
    file: &Path,
) -> Result<PathBuf> {
    if cfg.create_dirs {
        dirs.ensure()?;
    }
    let data = read_binary_file(file).context("failed to read source file")?;
    let dest = dirs.cache_path_for_uri(uri, cfg.subpath_limit());
    write_binary_file(&dest, &data).context("failed to write cache entry")?;
    tracing::info!(uri, dest = %dest.display(), bytes = data.len(), "stored cache entry");
    Ok(dest)
}
