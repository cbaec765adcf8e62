//! `uritools to-uri` – path to file:// URI.

use std::path::Path;
use uritools_core::path_to_file_uri;

pub fn run_to_uri(path: &Path) {
    println!("{}", path_to_file_uri(path));
}
