//! `uritools temp-path`.

use anyhow::Result;
use uritools_core::unique_temp_file_path;

pub fn run_temp_path() -> Result<()> {
    println!("{}", unique_temp_file_path()?.display());
    Ok(())
}
