//! URI to cache-directory name.
//!
//! One-way: the scheme is dropped, separators and URL punctuation become `_`,
//! and long results keep their tail. Distinct URIs may collide once truncated.

/// Schemes removed before sanitizing, checked in order.
const STRIPPED_SCHEMES: [&str; 3] = ["http://", "https://", "ipfs://"];

/// Characters replaced with `_`.
const REPLACED: [char; 7] = ['/', '\\', '#', '?', ':', '.', '&'];

/// Turns `uri` into a single filesystem-safe path segment.
///
/// When the result is longer than `max_len` characters only the last
/// `max_len` are kept. `None` or `Some(0)` means no limit.
///
/// # Examples
///
/// - `uri_to_subpath("https://foo.com/x?y#1", None)` → `"foo_com_x_y_1"`
/// - `uri_to_subpath("01234567890123456789", Some(7))` → `"3456789"`
pub fn uri_to_subpath(uri: &str, max_len: Option<usize>) -> String {
    let rest = STRIPPED_SCHEMES
        .iter()
        .find_map(|&scheme| uri.strip_prefix(scheme))
        .unwrap_or(uri);

    let sanitized: String = rest
        .chars()
        .map(|c| if REPLACED.contains(&c) { '_' } else { c })
        .collect();

    match max_len.filter(|&n| n > 0) {
        Some(max) => keep_tail(sanitized, max),
        None => sanitized,
    }
}

fn keep_tail(s: String, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s;
    }
    let cut = s
        .char_indices()
        .nth(count - max_chars)
        .map_or(s.len(), |(i, _)| i);
    s[cut..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme() {
        assert_eq!(uri_to_subpath("http://foo.com", None), "foo_com");
        assert_eq!(uri_to_subpath("https://foo.com", None), "foo_com");
        assert_eq!(uri_to_subpath("ipfs://Qm123/a", None), "Qm123_a");
    }

    #[test]
    fn scheme_match_is_case_sensitive() {
        assert_eq!(uri_to_subpath("HTTP://foo.com", None), "HTTP___foo_com");
        assert_eq!(uri_to_subpath("IPFS://x", None), "IPFS___x");
    }

    #[test]
    fn replaces_all_special_characters() {
        assert_eq!(uri_to_subpath("https://foo.com/x?y#1", None), "foo_com_x_y_1");
        assert_eq!(
            uri_to_subpath("https://foo.com/blargh/fred?something#27", None),
            "foo_com_blargh_fred_something_27"
        );
        assert_eq!(uri_to_subpath("a\\b&c:d", None), "a_b_c_d");
        assert_eq!(uri_to_subpath("file:///c:/x", None), "file____c__x");
    }

    #[test]
    fn keeps_other_characters() {
        assert_eq!(uri_to_subpath("a-b_c~d=e", None), "a-b_c~d=e");
    }

    #[test]
    fn truncation_keeps_tail() {
        assert_eq!(uri_to_subpath("01234567890123456789", Some(7)), "3456789");
        assert_eq!(uri_to_subpath("0123456", Some(7)), "0123456");
        assert_eq!(uri_to_subpath("short", Some(100)), "short");
    }

    #[test]
    fn zero_or_none_disables_truncation() {
        let long = "x".repeat(1000);
        assert_eq!(uri_to_subpath(&long, Some(0)).len(), 1000);
        assert_eq!(uri_to_subpath(&long, None).len(), 1000);
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(uri_to_subpath("caf\u{e9}\u{e9}\u{e9}", Some(2)), "\u{e9}\u{e9}");
    }
}
