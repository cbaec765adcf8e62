use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::uri::AuthorityStyle;

/// Default cap for cache subpath names, in characters.
pub const DEFAULT_MAX_SUBPATH_LEN: usize = 120;

/// Global configuration loaded from `~/.config/uritools/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UritoolsConfig {
    /// How `file://host/path` maps to a path: "unc" or "plain-prefix".
    /// Missing means the host platform's convention.
    #[serde(default)]
    pub authority_style: Option<AuthorityStyle>,
    /// Maximum length of a cache subpath; 0 disables truncation.
    #[serde(default = "default_max_subpath_len")]
    pub max_subpath_len: usize,
    /// Create data/cache/log directories on first use.
    #[serde(default = "default_create_dirs")]
    pub create_dirs: bool,
}

fn default_max_subpath_len() -> usize {
    DEFAULT_MAX_SUBPATH_LEN
}

fn default_create_dirs() -> bool {
    true
}

impl Default for UritoolsConfig {
    fn default() -> Self {
        Self {
            authority_style: None,
            max_subpath_len: DEFAULT_MAX_SUBPATH_LEN,
            create_dirs: true,
        }
    }
}

impl UritoolsConfig {
    /// Configured authority style, falling back to the native one.
    pub fn authority_style(&self) -> AuthorityStyle {
        self.authority_style.unwrap_or_else(AuthorityStyle::native)
    }

    /// Subpath limit in the form `uri_to_subpath` takes.
    pub fn subpath_limit(&self) -> Option<usize> {
        Some(self.max_subpath_len).filter(|&n| n > 0)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uritools")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UritoolsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UritoolsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<UritoolsConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UritoolsConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
