//! `uritools classify` – report the URI kind.

use uritools_core::{is_file_uri, is_http_uri};

pub(crate) fn classify(uri: &str) -> &'static str {
    if is_file_uri(uri) {
        "file"
    } else if is_http_uri(uri) {
        "http"
    } else {
        "other"
    }
}

pub fn run_classify(uri: &str) {
    println!("{}", classify(uri));
}
