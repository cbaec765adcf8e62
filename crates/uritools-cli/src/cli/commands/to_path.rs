//! `uritools to-path` – file:// URI to path.

use anyhow::{Context, Result};
use std::path::PathBuf;
use uritools_core::config::UritoolsConfig;
use uritools_core::{file_uri_to_path, AuthorityStyle};

/// Resolve `uri` with the explicit style, else the configured one.
pub(crate) fn resolve(
    cfg: &UritoolsConfig,
    uri: &str,
    style: Option<AuthorityStyle>,
) -> Result<PathBuf> {
    let style = style.unwrap_or_else(|| cfg.authority_style());
    file_uri_to_path(uri, style).with_context(|| format!("cannot convert {uri:?} to a path"))
}

pub fn run_to_path(cfg: &UritoolsConfig, uri: &str, style: Option<AuthorityStyle>) -> Result<()> {
    let path = resolve(cfg, uri, style)?;
    println!("{}", path.display());
    Ok(())
}
