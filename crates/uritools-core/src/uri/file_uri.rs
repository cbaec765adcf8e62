//! `file://` URI <-> path conversion.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::is_file_uri;
use super::root::{split_root, starts_with_drive};
use crate::error::MalformedUri;

/// How the authority of `file://host/path` maps to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorityStyle {
    /// Host is a network location: `file://host/p` -> `//host/p`.
    Unc,
    /// Host is the first path segment: `file://host/p` -> `/host/p`.
    PlainPrefix,
}

impl AuthorityStyle {
    /// `Unc` on Windows, `PlainPrefix` elsewhere.
    pub fn native() -> Self {
        if cfg!(windows) {
            AuthorityStyle::Unc
        } else {
            AuthorityStyle::PlainPrefix
        }
    }
}

impl Default for AuthorityStyle {
    fn default() -> Self {
        Self::native()
    }
}

/// Converts a `file://` URI to a local path.
///
/// - `file:///c:/dir/file.ext` -> `c:/dir/file.ext`
/// - `file:///home/user/file` -> `/home/user/file`
/// - `file://host/dir/file` -> `//host/dir/file` (`Unc`) or `/host/dir/file` (`PlainPrefix`)
///
/// For `file:///` without a drive letter the root `/` is kept instead of
/// dropping all of `file:///`, so POSIX absolute paths round-trip through
/// [`path_to_file_uri`]. As a consequence the POSIX path `/c:/x` comes back
/// as `c:/x`.
///
/// Inputs shorter than 8 bytes or without a file scheme are rejected; use
/// `unwrap_or_default()` for the empty-path fallback.
pub fn file_uri_to_path(uri: &str, style: AuthorityStyle) -> Result<PathBuf, MalformedUri> {
    if uri.len() < 8 {
        tracing::debug!(uri, "rejecting short file uri");
        return Err(MalformedUri::TooShort { len: uri.len() });
    }
    if !is_file_uri(uri) {
        tracing::debug!(uri, "rejecting non-file uri");
        return Err(MalformedUri::NotFileUri);
    }

    let start = if uri.as_bytes()[7] == b'/' {
        // Drive paths lose the root slash; POSIX paths keep it.
        if starts_with_drive(&uri[8..]) {
            8
        } else {
            7
        }
    } else {
        match style {
            AuthorityStyle::Unc => 5,
            AuthorityStyle::PlainPrefix => 6,
        }
    };
    Ok(PathBuf::from(&uri[start..]))
}

/// [`file_uri_to_path`] with the host platform's authority style.
pub fn file_uri_to_path_native(uri: &str) -> Result<PathBuf, MalformedUri> {
    file_uri_to_path(uri, AuthorityStyle::native())
}

/// Converts a local path to a `file://` URI with forward slashes.
///
/// Drive-letter paths get `file:///c:/...`, UNC paths `file://host/...`.
/// Non-UTF-8 path bytes are replaced with U+FFFD.
pub fn path_to_file_uri(path: impl AsRef<Path>) -> String {
    let text = path.as_ref().to_string_lossy();
    let parts = split_root(&text);

    let mut uri = if parts.root_name.is_empty() {
        String::from("file://")
    } else if parts.is_unc() {
        format!("file:{}", parts.root_name)
    } else {
        format!("file:///{}", parts.root_name)
    };
    uri.push_str(parts.root_dir);
    uri.push_str(parts.relative);
    uri.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_uri_strips_prefix() {
        for style in [AuthorityStyle::Unc, AuthorityStyle::PlainPrefix] {
            assert_eq!(
                file_uri_to_path("file:///c:/somepath/somefile.ext", style).unwrap(),
                PathBuf::from("c:/somepath/somefile.ext")
            );
        }
    }

    #[test]
    fn authority_follows_style() {
        assert_eq!(
            file_uri_to_path("file://fnord/somepath/somefile.ext", AuthorityStyle::Unc).unwrap(),
            PathBuf::from("//fnord/somepath/somefile.ext")
        );
        assert_eq!(
            file_uri_to_path("file://fnord/somepath/somefile.ext", AuthorityStyle::PlainPrefix)
                .unwrap(),
            PathBuf::from("/fnord/somepath/somefile.ext")
        );
    }

    #[test]
    fn native_matches_platform_style() {
        let uri = "file://fnord/a";
        assert_eq!(
            file_uri_to_path_native(uri),
            file_uri_to_path(uri, AuthorityStyle::native())
        );
    }

    #[test]
    fn posix_uri_keeps_root() {
        assert_eq!(
            file_uri_to_path("file:///home/user/a.txt", AuthorityStyle::PlainPrefix).unwrap(),
            PathBuf::from("/home/user/a.txt")
        );
    }

    #[test]
    fn drive_like_posix_segment_loses_root() {
        let uri = path_to_file_uri("/c:/x");
        assert_eq!(uri, "file:///c:/x");
        assert_eq!(
            file_uri_to_path(&uri, AuthorityStyle::PlainPrefix).unwrap(),
            PathBuf::from("c:/x")
        );
    }

    #[test]
    fn upper_case_scheme() {
        assert_eq!(
            file_uri_to_path("FILE:///c:/x", AuthorityStyle::PlainPrefix).unwrap(),
            PathBuf::from("c:/x")
        );
    }

    #[test]
    fn malformed_inputs() {
        assert_eq!(
            file_uri_to_path("file://", AuthorityStyle::Unc),
            Err(MalformedUri::TooShort { len: 7 })
        );
        assert_eq!(
            file_uri_to_path("http://example.com/x", AuthorityStyle::Unc),
            Err(MalformedUri::NotFileUri)
        );
        assert_eq!(
            file_uri_to_path("file:fnord", AuthorityStyle::Unc).unwrap_or_default(),
            PathBuf::new()
        );
    }

    #[test]
    fn path_to_uri_forms() {
        assert_eq!(
            path_to_file_uri("c:/somepath/somefile.ext"),
            "file:///c:/somepath/somefile.ext"
        );
        assert_eq!(
            path_to_file_uri("//fnord/somepath/somefile.ext"),
            "file://fnord/somepath/somefile.ext"
        );
        assert_eq!(
            path_to_file_uri("\\\\fnord\\share\\f.txt"),
            "file://fnord/share/f.txt"
        );
        assert_eq!(path_to_file_uri("C:\\dir\\f.txt"), "file:///C:/dir/f.txt");
        assert_eq!(path_to_file_uri("/home/user/f"), "file:///home/user/f");
    }

    #[test]
    fn round_trip_without_authority() {
        for p in ["c:/a/b.ext", "/home/user/notes.txt", "d:/"] {
            let uri = path_to_file_uri(p);
            for style in [AuthorityStyle::Unc, AuthorityStyle::PlainPrefix] {
                assert_eq!(file_uri_to_path(&uri, style).unwrap(), PathBuf::from(p));
            }
        }
        let uri = path_to_file_uri("c:\\a\\b.ext");
        assert_eq!(
            file_uri_to_path(&uri, AuthorityStyle::PlainPrefix).unwrap(),
            PathBuf::from("c:/a/b.ext")
        );
    }

    #[test]
    fn unc_round_trip() {
        let uri = path_to_file_uri("//host/share/f.bin");
        assert_eq!(
            file_uri_to_path(&uri, AuthorityStyle::Unc).unwrap(),
            PathBuf::from("//host/share/f.bin")
        );
    }

    #[test]
    fn style_serde_names() {
        #[derive(Deserialize)]
        struct W {
            s: AuthorityStyle,
        }
        let w: W = toml::from_str("s = \"plain-prefix\"").unwrap();
        assert_eq!(w.s, AuthorityStyle::PlainPrefix);
        let w: W = toml::from_str("s = \"unc\"").unwrap();
        assert_eq!(w.s, AuthorityStyle::Unc);
    }
}
