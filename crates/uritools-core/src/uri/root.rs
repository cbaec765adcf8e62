//! Lexical split of a path string into root-name, root-directory and relative part.

/// Borrowed pieces of a path string. Concatenating `root_name`, `root_dir`
/// and `relative` gives the input minus any repeated separators after the root.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct RootParts<'a> {
    pub root_name: &'a str,
    pub root_dir: &'a str,
    pub relative: &'a str,
}

impl RootParts<'_> {
    /// Root name is a network host (`//host` or `\\host`).
    pub fn is_unc(&self) -> bool {
        self.root_name.starts_with("//") || self.root_name.starts_with("\\\\")
    }
}

fn is_sep(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

pub(super) fn split_root(path: &str) -> RootParts<'_> {
    let bytes = path.as_bytes();
    let name_len = unc_host_len(bytes)
        .or_else(|| drive_len(bytes))
        .unwrap_or(0);
    let (root_name, rest) = path.split_at(name_len);

    let dir_len = usize::from(rest.as_bytes().first().is_some_and(|&b| is_sep(b)));
    let (root_dir, after) = rest.split_at(dir_len);
    let relative = after.trim_start_matches(|c| c == '/' || c == '\\');

    RootParts {
        root_name,
        root_dir,
        relative,
    }
}

/// `s` begins with a drive-letter root name such as `c:`.
pub(super) fn starts_with_drive(s: &str) -> bool {
    drive_len(s.as_bytes()).is_some()
}

fn unc_host_len(b: &[u8]) -> Option<usize> {
    if b.len() > 2 && is_sep(b[0]) && is_sep(b[1]) && !is_sep(b[2]) {
        let end = b[2..]
            .iter()
            .position(|&c| is_sep(c))
            .map_or(b.len(), |i| i + 2);
        Some(end)
    } else {
        None
    }
}

fn drive_len(b: &[u8]) -> Option<usize> {
    (b.len() >= 2 && b[0].is_ascii_alphabetic() && b[1] == b':').then_some(2)
}
