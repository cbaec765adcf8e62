//! `uritools dirs` – show the application directory layout.

use anyhow::Result;
use std::path::PathBuf;
use uritools_core::dirs::{executable_path, working_data_path, AppDirs};

/// Label/path rows printed by `uritools dirs`.
pub(crate) fn layout_rows(
    dirs: &AppDirs,
    working_data: PathBuf,
    executable: PathBuf,
) -> Vec<(&'static str, PathBuf)> {
    vec![
        ("data", dirs.data.clone()),
        ("cache", dirs.cache.clone()),
        ("log", dirs.log.clone()),
        ("work-data", working_data),
        ("executable", executable),
    ]
}

pub fn run_dirs() -> Result<()> {
    let dirs = AppDirs::from_xdg()?;
    for (label, path) in layout_rows(&dirs, working_data_path()?, executable_path()?) {
        println!("{:<11} {}", label, path.display());
    }
    Ok(())
}
