//! `uritools subpath` – URI to cache subpath.

use uritools_core::config::UritoolsConfig;
use uritools_core::uri_to_subpath;

pub fn run_subpath(cfg: &UritoolsConfig, uri: &str, max: Option<usize>) {
    let limit = max.or_else(|| cfg.subpath_limit());
    println!("{}", uri_to_subpath(uri, limit));
}
