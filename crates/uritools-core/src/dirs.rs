//! Application directories: data, cache and logs.
//!
//! Cache entries for remote resources live at `cache/<subpath>`, where the
//! subpath comes from [`uri_to_subpath`].

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::subpath::uri_to_subpath;

const APP_PREFIX: &str = "uritools";

/// Resolved directory layout for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Persistent application data.
    pub data: PathBuf,
    /// URI-keyed cache entries.
    pub cache: PathBuf,
    /// Log files.
    pub log: PathBuf,
}

impl AppDirs {
    /// XDG data, cache and state homes under the `uritools` prefix.
    pub fn from_xdg() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
        Ok(Self {
            data: xdg_dirs.get_data_home(),
            cache: xdg_dirs.get_cache_home(),
            log: xdg_dirs.get_state_home().join("logs"),
        })
    }

    /// Everything under one root (portable installs, tests).
    pub fn from_root(root: &Path) -> Self {
        Self {
            data: root.join("data"),
            cache: root.join("cache"),
            log: root.join("logs"),
        }
    }

    /// Cache location for `uri`; the name is at most `max_len` characters.
    pub fn cache_path_for_uri(&self, uri: &str, max_len: Option<usize>) -> PathBuf {
        self.cache.join(uri_to_subpath(uri, max_len))
    }

    /// Create all directories.
    pub fn ensure(&self) -> Result<()> {
        for dir in [&self.data, &self.cache, &self.log] {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }
}

/// Path of the running executable.
pub fn executable_path() -> Result<PathBuf> {
    std::env::current_exe().context("failed to resolve executable path")
}

/// `data` directory under the current working directory.
pub fn working_data_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join("data"))
}
