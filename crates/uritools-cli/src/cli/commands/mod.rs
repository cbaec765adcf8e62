//! CLI command handlers, one file per command.

mod cache;
mod classify;
mod dirs;
mod subpath;
mod temp_path;
mod to_path;
mod to_uri;

pub use cache::{run_cache_path, run_store};
pub use classify::run_classify;
pub use dirs::run_dirs;
pub use subpath::run_subpath;
pub use temp_path::run_temp_path;
pub use to_path::run_to_path;
pub use to_uri::run_to_uri;
