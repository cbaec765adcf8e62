//! File URI detection and conversion to and from local paths.
//!
//! Root names (`c:`, `//host`) are recognized lexically on every host, so a
//! Windows-style path round-trips the same way on Linux as on Windows.

mod file_uri;
mod root;

pub use file_uri::{file_uri_to_path, file_uri_to_path_native, path_to_file_uri, AuthorityStyle};

/// True iff `uri` starts with `file://` or `FILE://`.
///
/// Only those two exact casings are accepted; `File://` is not a file URI.
pub fn is_file_uri(uri: &str) -> bool {
    uri.starts_with("file://") || uri.starts_with("FILE://")
}

/// True iff `uri` starts with `http://` or `https://`, ignoring case.
pub fn is_http_uri(uri: &str) -> bool {
    has_prefix_ignore_case(uri, "http://") || has_prefix_ignore_case(uri, "https://")
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_uri_exact_casings() {
        assert!(is_file_uri("file://fnord"));
        assert!(is_file_uri("FILE://fnord"));
        assert!(!is_file_uri("File://fnord"));
        assert!(!is_file_uri("file:fnord"));
        assert!(!is_file_uri("http://fnord"));
        assert!(!is_file_uri("/fnord/something"));
    }

    #[test]
    fn short_inputs_are_not_file_uris() {
        assert!(!is_file_uri(""));
        assert!(!is_file_uri("file:/"));
        assert!(is_file_uri("file://"));
    }

    #[test]
    fn http_any_case() {
        assert!(is_http_uri("http://example.com"));
        assert!(is_http_uri("https://example.com"));
        assert!(is_http_uri("HTTP://EXAMPLE.COM"));
        assert!(is_http_uri("HtTpS://example.com/x"));
        assert!(!is_http_uri("ftp://example.com"));
        assert!(!is_http_uri("http:/example.com"));
        assert!(!is_http_uri("http"));
        assert!(!is_file_uri("HTTPS://example.com"));
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert!(!is_http_uri("h\u{e9}tp://x"));
        assert!(!is_http_uri("\u{1f600}"));
    }
}
